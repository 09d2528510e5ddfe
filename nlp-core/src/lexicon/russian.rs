//! Léxico do modelo russo (`ru_core_news_sm`).
//!
//! O russo flexiona nomes próprios por caso; por isso os gazetteers trazem as
//! formas mais frequentes ("москва", "москве", "москву") em vez de depender
//! apenas do lema.

use super::{rule, Lexicon, SuffixRule};
use crate::language::Language;
use crate::pos::UPos::{self, *};
use crate::tagger::EntityCategory::{self, *};

pub static RUSSIAN: Lexicon = Lexicon {
    language: Language::Ru,
    closed_class: CLOSED_CLASS,
    open_class: OPEN_CLASS,
    pos_suffixes: POS_SUFFIXES,
    lemma_exceptions: LEMMA_EXCEPTIONS,
    lemma_rules: LEMMA_RULES,
    keep_proper_case: false,
    abbreviations: &[
        "г", "гг", "т", "см", "др", "ул", "им", "проф", "акад", "тыс", "млн", "млрд", "руб",
        "стр", "рис", "пр", "д", "кв", "доц", "св",
    ],
    clitics: &[],
    person_titles: &[
        "господин", "госпожа", "президент", "президента", "министр", "премьер", "доктор",
        "профессор", "генерал", "писатель", "поэт", "директор", "губернатор", "мэр", "депутат",
        "академик", "царь", "князь", "император",
    ],
    org_prefixes: &[
        "ооо", "оао", "зао", "пао", "нко", "компания", "компании", "корпорация", "концерн",
        "холдинг", "банк", "фонд",
    ],
    org_suffixes: &[],
    gazetteer: GAZETTEER,
};

const CLOSED_CLASS: &[(&str, UPos)] = &[
    // Предлоги
    ("в", Adp), ("во", Adp), ("на", Adp), ("с", Adp), ("со", Adp), ("к", Adp), ("ко", Adp),
    ("по", Adp), ("из", Adp), ("у", Adp), ("о", Adp), ("об", Adp), ("обо", Adp), ("от", Adp),
    ("до", Adp), ("за", Adp), ("под", Adp), ("над", Adp), ("для", Adp), ("без", Adp),
    ("при", Adp), ("через", Adp), ("про", Adp), ("перед", Adp), ("между", Adp),
    ("около", Adp), ("после", Adp), ("вокруг", Adp), ("среди", Adp),
    // Союзы
    ("и", Cconj), ("а", Cconj), ("но", Cconj), ("или", Cconj), ("либо", Cconj),
    ("что", Sconj), ("чтобы", Sconj), ("если", Sconj), ("когда", Sconj), ("хотя", Sconj),
    ("будто", Sconj), ("как", Sconj),
    // Местоимения
    ("я", Pron), ("ты", Pron), ("он", Pron), ("она", Pron), ("оно", Pron), ("мы", Pron),
    ("вы", Pron), ("они", Pron), ("меня", Pron), ("тебя", Pron), ("его", Pron), ("её", Pron),
    ("ее", Pron), ("ему", Pron), ("ей", Pron), ("нам", Pron), ("вам", Pron), ("им", Pron),
    ("их", Pron), ("нас", Pron), ("вас", Pron), ("него", Pron), ("неё", Pron),
    ("нему", Pron), ("ней", Pron), ("ним", Pron), ("них", Pron), ("мне", Pron),
    ("тебе", Pron), ("себя", Pron), ("себе", Pron), ("кто", Pron), ("это", Pron),
    ("ничто", Pron), ("никто", Pron), ("кого", Pron), ("чего", Pron), ("кому", Pron),
    ("чему", Pron), ("который", Pron), ("которая", Pron), ("которое", Pron),
    ("которые", Pron),
    // Определители
    ("этот", Det), ("эта", Det), ("эти", Det), ("тот", Det), ("та", Det), ("те", Det),
    ("весь", Det), ("вся", Det), ("все", Det), ("всё", Det), ("мой", Det), ("моя", Det),
    ("моё", Det), ("мои", Det), ("твой", Det), ("твоя", Det), ("наш", Det), ("наша", Det),
    ("ваш", Det), ("ваша", Det), ("свой", Det), ("своя", Det), ("каждый", Det),
    ("какой", Det), ("такой", Det),
    // Частицы
    ("не", Part), ("ни", Part), ("ли", Part), ("же", Part), ("бы", Part), ("вот", Part),
    ("только", Part), ("даже", Part), ("ведь", Part), ("лишь", Part), ("нет", Part),
    // Вспомогательные глаголы
    ("быть", Aux), ("был", Aux), ("была", Aux), ("было", Aux), ("были", Aux),
    ("будет", Aux), ("будут", Aux), ("буду", Aux), ("будем", Aux),
    // Наречия
    ("очень", Adv), ("уже", Adv), ("ещё", Adv), ("еще", Adv), ("тоже", Adv), ("также", Adv),
    ("здесь", Adv), ("там", Adv), ("тут", Adv), ("сейчас", Adv), ("теперь", Adv),
    ("всегда", Adv), ("никогда", Adv), ("сегодня", Adv), ("завтра", Adv), ("вчера", Adv),
    ("потом", Adv), ("почти", Adv), ("где", Adv), ("куда", Adv), ("почему", Adv),
    ("зачем", Adv),
    // Междометия
    ("привет", Intj), ("здравствуйте", Intj), ("ой", Intj), ("ах", Intj), ("ура", Intj),
    ("спасибо", Intj),
];

const OPEN_CLASS: &[(&str, UPos)] = &[
    // Существительные на -ть, которые суффиксы отнесли бы к глаголам
    ("мать", Noun), ("путь", Noun), ("площадь", Noun), ("тетрадь", Noun), ("часть", Noun),
    ("власть", Noun), ("сеть", Noun), ("смерть", Noun), ("печать", Noun),
    // Частотные глаголы без характерного суффикса
    ("может", Verb), ("могу", Verb), ("могут", Verb), ("мог", Verb), ("могла", Verb),
    ("хочет", Verb), ("хочу", Verb), ("хотят", Verb), ("пишет", Verb), ("пишу", Verb),
    ("идёт", Verb), ("идет", Verb), ("шёл", Verb), ("шел", Verb), ("шла", Verb),
    ("шли", Verb), ("живёт", Verb), ("живет", Verb), ("есть", Verb),
    // Частотные существительные
    ("люди", Noun), ("людей", Noun), ("дети", Noun), ("детей", Noun), ("время", Noun),
    ("кот", Noun), ("дом", Noun),
];

const POS_SUFFIXES: &[(&str, UPos)] = &[
    // Глаголы
    ("ться", Verb),
    ("тся", Verb),
    ("ть", Verb),
    ("ает", Verb),
    ("яет", Verb),
    ("еет", Verb),
    ("ует", Verb),
    ("ёт", Verb),
    ("ит", Verb),
    ("ют", Verb),
    ("ят", Verb),
    ("ешь", Verb),
    ("ишь", Verb),
    ("ила", Verb),
    ("ела", Verb),
    ("ала", Verb),
    ("яла", Verb),
    ("али", Verb),
    ("или", Verb),
    ("ели", Verb),
    ("ало", Verb),
    ("ило", Verb),
    ("ил", Verb),
    ("ел", Verb),
    // Прилагательные
    ("ский", Adj),
    ("ская", Adj),
    ("ское", Adj),
    ("ские", Adj),
    ("ского", Adj),
    ("ской", Adj),
    ("ый", Adj),
    ("ий", Adj),
    ("ая", Adj),
    ("яя", Adj),
    ("ое", Adj),
    ("ые", Adj),
    ("ие", Adj),
    ("ого", Adj),
    ("ому", Adj),
    ("ых", Adj),
    ("ую", Adj),
    ("юю", Adj),
    ("ым", Adj),
    // Существительные
    ("ость", Noun),
    ("ние", Noun),
    ("ция", Noun),
    ("ство", Noun),
    ("тель", Noun),
    ("ник", Noun),
];

const LEMMA_EXCEPTIONS: &[(&str, &str)] = &[
    ("сидит", "сидеть"), ("сидел", "сидеть"), ("сидела", "сидеть"), ("сидят", "сидеть"),
    ("окне", "окно"), ("окна", "окно"), ("окном", "окно"), ("окну", "окно"),
    ("кошки", "кошка"), ("кошку", "кошка"), ("кошкой", "кошка"), ("кошке", "кошка"),
    ("москве", "москва"), ("москву", "москва"), ("москвы", "москва"), ("москвой", "москва"),
    ("россии", "россия"), ("россию", "россия"), ("россией", "россия"),
    ("был", "быть"), ("была", "быть"), ("было", "быть"), ("были", "быть"),
    ("будет", "быть"), ("будут", "быть"), ("буду", "быть"), ("будем", "быть"),
    ("есть", "быть"), ("идёт", "идти"), ("идет", "идти"), ("шёл", "идти"), ("шел", "идти"),
    ("шла", "идти"), ("шли", "идти"), ("живёт", "жить"), ("живет", "жить"),
    ("люди", "человек"), ("людей", "человек"), ("дети", "ребёнок"), ("детей", "ребёнок"),
    ("хочет", "хотеть"), ("хочу", "хотеть"), ("хотят", "хотеть"), ("может", "мочь"),
    ("могу", "мочь"), ("могут", "мочь"), ("мог", "мочь"), ("могла", "мочь"),
    ("пишет", "писать"), ("пишу", "писать"), ("спит", "спать"), ("лежит", "лежать"),
    ("смотрит", "смотреть"), ("видит", "видеть"), ("меня", "я"), ("мне", "я"),
    ("тебя", "ты"), ("тебе", "ты"), ("его", "он"), ("ему", "он"), ("него", "он"),
    ("её", "она"), ("ее", "она"), ("ей", "она"), ("ней", "она"), ("нас", "мы"),
    ("нам", "мы"), ("вас", "вы"), ("вам", "вы"), ("их", "они"), ("им", "они"),
    ("них", "они"), ("дома", "дом"), ("доме", "дом"), ("году", "год"), ("года", "год"),
    ("лет", "год"), ("времени", "время"), ("жизни", "жизнь"),
];

const LEMMA_RULES: &[SuffixRule] = &[
    // Глаголы: настоящее и прошедшее время → инфинитив
    rule(Verb, "ится", "иться", 2),
    rule(Verb, "ется", "еться", 2),
    rule(Verb, "ают", "ать", 1),
    rule(Verb, "яют", "ять", 1),
    rule(Verb, "ает", "ать", 1),
    rule(Verb, "яет", "ять", 1),
    rule(Verb, "ует", "овать", 1),
    rule(Verb, "уют", "овать", 1),
    rule(Verb, "еет", "еть", 1),
    rule(Verb, "ила", "ить", 2),
    rule(Verb, "ило", "ить", 2),
    rule(Verb, "или", "ить", 2),
    rule(Verb, "ил", "ить", 2),
    rule(Verb, "ела", "еть", 2),
    rule(Verb, "ели", "еть", 2),
    rule(Verb, "ел", "еть", 2),
    rule(Verb, "ала", "ать", 2),
    rule(Verb, "али", "ать", 2),
    rule(Verb, "ало", "ать", 2),
    rule(Verb, "ят", "ить", 2),
    rule(Verb, "ит", "ить", 2),
    // Прилагательные → мужской род, именительный падеж
    rule(Adj, "ского", "ский", 1),
    rule(Adj, "скому", "ский", 1),
    rule(Adj, "ской", "ский", 1),
    rule(Adj, "ская", "ский", 1),
    rule(Adj, "ское", "ский", 1),
    rule(Adj, "ские", "ский", 1),
    rule(Adj, "ских", "ский", 1),
    rule(Adj, "ого", "ый", 2),
    rule(Adj, "ому", "ый", 2),
    rule(Adj, "ыми", "ый", 2),
    rule(Adj, "ым", "ый", 2),
    rule(Adj, "ых", "ый", 2),
    rule(Adj, "ая", "ый", 2),
    rule(Adj, "ое", "ый", 2),
    rule(Adj, "ые", "ый", 2),
    rule(Adj, "ую", "ый", 2),
    rule(Adj, "его", "ий", 2),
    rule(Adj, "ему", "ий", 2),
    rule(Adj, "ими", "ий", 2),
    rule(Adj, "их", "ий", 2),
    rule(Adj, "яя", "ий", 2),
    rule(Adj, "ее", "ий", 2),
    rule(Adj, "ие", "ий", 2),
    rule(Adj, "юю", "ий", 2),
    // Существительные
    rule(Noun, "ости", "ость", 2),
    rule(Noun, "остью", "ость", 2),
    rule(Noun, "ением", "ение", 2),
    rule(Noun, "ения", "ение", 2),
    rule(Noun, "ении", "ение", 2),
    rule(Noun, "ией", "ия", 2),
    rule(Noun, "ии", "ия", 2),
    rule(Noun, "ию", "ия", 2),
    rule(Noun, "ов", "", 3),
];

const GAZETTEER: &[(&str, EntityCategory)] = &[
    // Персоны
    ("александр пушкин", Per), ("пушкин", Per), ("пушкина", Per), ("пушкину", Per),
    ("лев толстой", Per), ("толстой", Per), ("толстого", Per), ("фёдор достоевский", Per),
    ("достоевский", Per), ("достоевского", Per), ("владимир путин", Per), ("путин", Per),
    ("путина", Per), ("путину", Per), ("юрий гагарин", Per), ("гагарин", Per),
    ("антон чехов", Per), ("чехов", Per), ("ломоносов", Per), ("менделеев", Per),
    ("владимир", Per), ("иван", Per), ("ивана", Per), ("мария", Per), ("марии", Per),
    ("анна", Per), ("анны", Per), ("сергей", Per), ("ольга", Per), ("пётр", Per),
    ("петр", Per), ("михаил", Per), ("дмитрий", Per), ("алексей", Per), ("наталья", Per),
    ("екатерина", Per), ("елена", Per),
    // Локации
    ("москва", Loc), ("москвы", Loc), ("москве", Loc), ("москву", Loc), ("москвой", Loc),
    ("россия", Loc), ("россии", Loc), ("россию", Loc), ("россией", Loc),
    ("санкт-петербург", Loc), ("петербург", Loc), ("петербурга", Loc),
    ("петербурге", Loc), ("киев", Loc), ("киева", Loc), ("киеве", Loc), ("минск", Loc),
    ("лондон", Loc), ("лондоне", Loc), ("париж", Loc), ("париже", Loc), ("берлин", Loc),
    ("берлине", Loc), ("европа", Loc), ("европы", Loc), ("европе", Loc), ("сибирь", Loc),
    ("сибири", Loc), ("волга", Loc), ("волге", Loc), ("урал", Loc), ("урале", Loc),
    ("кремль", Loc), ("кремле", Loc), ("сша", Loc), ("германия", Loc), ("германии", Loc),
    ("франция", Loc), ("франции", Loc), ("китай", Loc), ("китае", Loc), ("китая", Loc),
    ("япония", Loc), ("японии", Loc), ("англия", Loc), ("англии", Loc), ("украина", Loc),
    ("украины", Loc), ("украине", Loc), ("казань", Loc), ("новосибирск", Loc),
    ("екатеринбург", Loc), ("сочи", Loc), ("крым", Loc), ("крыму", Loc),
    // Организации
    ("газпром", Org), ("газпрома", Org), ("сбербанк", Org), ("сбербанка", Org),
    ("яндекс", Org), ("яндекса", Org), ("роскосмос", Org), ("аэрофлот", Org), ("ржд", Org),
    ("мгу", Org), ("спбгу", Org), ("оон", Org), ("нато", Org), ("госдума", Org),
    ("госдумы", Org), ("тасс", Org), ("риа новости", Org), ("лукойл", Org),
    ("роснефть", Org), ("мтс", Org), ("вконтакте", Org), ("совет федерации", Org),
    ("центробанк", Org), ("цб", Org),
];
