//! Léxico do modelo inglês (`en_core_web_sm`).

use super::{rule, Lexicon, SuffixRule};
use crate::language::Language;
use crate::pos::UPos::{self, *};
use crate::tagger::EntityCategory::{self, *};

pub static ENGLISH: Lexicon = Lexicon {
    language: Language::En,
    closed_class: CLOSED_CLASS,
    open_class: OPEN_CLASS,
    pos_suffixes: POS_SUFFIXES,
    lemma_exceptions: LEMMA_EXCEPTIONS,
    lemma_rules: LEMMA_RULES,
    keep_proper_case: true,
    abbreviations: &[
        "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "inc", "ltd", "co", "corp", "vs",
        "etc", "jan", "feb", "aug", "sept", "oct", "nov", "dec", "mt",
    ],
    clitics: &[
        "n't", "'s", "'m", "'re", "'ve", "'ll", "'d", "n’t", "’s", "’m", "’re", "’ve", "’ll", "’d",
    ],
    person_titles: &[
        "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "dr", "dr.", "prof", "prof.", "president",
        "senator", "governor", "minister", "king", "queen", "prince", "princess", "sir", "lady",
        "lord", "ceo", "general", "captain", "judge", "pope",
    ],
    org_prefixes: &[],
    org_suffixes: &[
        "inc", "inc.", "corp", "corp.", "ltd", "ltd.", "llc", "co.", "group", "corporation",
        "company", "holdings", "university", "bank",
    ],
    gazetteer: GAZETTEER,
};

const CLOSED_CLASS: &[(&str, UPos)] = &[
    // Determinantes
    ("the", Det), ("a", Det), ("an", Det), ("this", Det), ("that", Det), ("these", Det),
    ("those", Det), ("every", Det), ("each", Det), ("some", Det), ("any", Det), ("no", Det),
    ("all", Det), ("both", Det), ("either", Det), ("neither", Det), ("another", Det),
    // Pronomes
    ("i", Pron), ("you", Pron), ("he", Pron), ("she", Pron), ("it", Pron), ("we", Pron),
    ("they", Pron), ("me", Pron), ("him", Pron), ("her", Pron), ("us", Pron), ("them", Pron),
    ("my", Pron), ("your", Pron), ("his", Pron), ("its", Pron), ("our", Pron), ("their", Pron),
    ("mine", Pron), ("yours", Pron), ("hers", Pron), ("ours", Pron), ("theirs", Pron),
    ("myself", Pron), ("yourself", Pron), ("himself", Pron), ("herself", Pron),
    ("itself", Pron), ("ourselves", Pron), ("themselves", Pron), ("who", Pron), ("whom", Pron),
    ("whose", Pron), ("what", Pron), ("which", Pron), ("someone", Pron), ("somebody", Pron),
    ("something", Pron), ("anyone", Pron), ("anything", Pron), ("everyone", Pron),
    ("everything", Pron), ("nobody", Pron), ("nothing", Pron),
    // Preposições
    ("in", Adp), ("on", Adp), ("at", Adp), ("by", Adp), ("for", Adp), ("with", Adp),
    ("from", Adp), ("to", Adp), ("of", Adp), ("about", Adp), ("into", Adp), ("onto", Adp),
    ("over", Adp), ("under", Adp), ("between", Adp), ("through", Adp), ("during", Adp),
    ("before", Adp), ("after", Adp), ("above", Adp), ("below", Adp), ("without", Adp),
    ("within", Adp), ("against", Adp), ("among", Adp), ("across", Adp), ("behind", Adp),
    ("beyond", Adp), ("near", Adp), ("since", Adp), ("until", Adp), ("upon", Adp),
    ("via", Adp), ("per", Adp),
    // Conjunções
    ("and", Cconj), ("or", Cconj), ("but", Cconj), ("nor", Cconj),
    ("because", Sconj), ("if", Sconj), ("while", Sconj), ("although", Sconj),
    ("though", Sconj), ("unless", Sconj), ("whether", Sconj), ("whereas", Sconj),
    // Auxiliares e modais
    ("is", Aux), ("am", Aux), ("are", Aux), ("was", Aux), ("were", Aux), ("be", Aux),
    ("been", Aux), ("being", Aux), ("have", Aux), ("has", Aux), ("had", Aux), ("do", Aux),
    ("does", Aux), ("did", Aux), ("will", Aux), ("would", Aux), ("shall", Aux),
    ("should", Aux), ("can", Aux), ("could", Aux), ("may", Aux), ("might", Aux),
    ("must", Aux), ("ca", Aux), ("wo", Aux),
    ("'m", Aux), ("'re", Aux), ("'ve", Aux), ("'ll", Aux), ("'d", Aux),
    ("’m", Aux), ("’re", Aux), ("’ve", Aux), ("’ll", Aux), ("’d", Aux),
    // Partículas
    ("not", Part), ("n't", Part), ("n’t", Part), ("'s", Part), ("’s", Part),
    // Advérbios frequentes
    ("very", Adv), ("too", Adv), ("also", Adv), ("just", Adv), ("only", Adv), ("even", Adv),
    ("still", Adv), ("already", Adv), ("always", Adv), ("never", Adv), ("often", Adv),
    ("sometimes", Adv), ("here", Adv), ("there", Adv), ("now", Adv), ("then", Adv),
    ("today", Adv), ("tomorrow", Adv), ("yesterday", Adv), ("again", Adv), ("soon", Adv),
    // Interjeições
    ("hello", Intj), ("hi", Intj), ("hey", Intj), ("oh", Intj), ("wow", Intj), ("yes", Intj),
    ("thanks", Intj), ("goodbye", Intj), ("bye", Intj), ("ok", Intj), ("okay", Intj),
];

const OPEN_CLASS: &[(&str, UPos)] = &[
    // Verbos irregulares e frequentes sem sufixo marcado
    ("go", Verb), ("goes", Verb), ("went", Verb), ("gone", Verb), ("say", Verb),
    ("says", Verb), ("said", Verb), ("make", Verb), ("made", Verb), ("take", Verb),
    ("took", Verb), ("taken", Verb), ("see", Verb), ("saw", Verb), ("seen", Verb),
    ("come", Verb), ("came", Verb), ("get", Verb), ("got", Verb), ("know", Verb),
    ("knew", Verb), ("known", Verb), ("think", Verb), ("thought", Verb), ("give", Verb),
    ("gave", Verb), ("given", Verb), ("find", Verb), ("found", Verb), ("tell", Verb),
    ("told", Verb), ("become", Verb), ("became", Verb), ("leave", Verb), ("left", Verb),
    ("feel", Verb), ("felt", Verb), ("put", Verb), ("bring", Verb), ("brought", Verb),
    ("begin", Verb), ("began", Verb), ("begun", Verb), ("keep", Verb), ("kept", Verb),
    ("hold", Verb), ("held", Verb), ("write", Verb), ("wrote", Verb), ("written", Verb),
    ("stand", Verb), ("stood", Verb), ("hear", Verb), ("heard", Verb), ("let", Verb),
    ("mean", Verb), ("meant", Verb), ("meet", Verb), ("met", Verb), ("run", Verb),
    ("ran", Verb), ("pay", Verb), ("paid", Verb), ("sit", Verb), ("sat", Verb),
    ("sits", Verb), ("speak", Verb), ("spoke", Verb), ("spoken", Verb), ("lead", Verb),
    ("led", Verb), ("read", Verb), ("grow", Verb), ("grew", Verb), ("lose", Verb),
    ("lost", Verb), ("fall", Verb), ("fell", Verb), ("send", Verb), ("sent", Verb),
    ("build", Verb), ("built", Verb), ("understand", Verb), ("understood", Verb),
    ("eat", Verb), ("ate", Verb), ("eaten", Verb), ("love", Verb), ("like", Verb),
    ("want", Verb), ("need", Verb), ("use", Verb), ("work", Verb), ("live", Verb),
    ("play", Verb), ("learn", Verb), ("visit", Verb), ("help", Verb), ("buy", Verb),
    ("bought", Verb),
    // Substantivos que os sufixos classificariam mal
    ("fun", Noun), ("news", Noun), ("people", Noun), ("children", Noun), ("thing", Noun),
    ("things", Noun), ("morning", Noun), ("evening", Noun), ("building", Noun),
    ("meeting", Noun), ("time", Noun), ("city", Noun), ("day", Noun), ("cat", Noun),
    ("dog", Noun), ("window", Noun), ("man", Noun), ("men", Noun), ("woman", Noun),
    ("women", Noun), ("child", Noun),
    // Adjetivos frequentes
    ("good", Adj), ("better", Adj), ("best", Adj), ("bad", Adj), ("worse", Adj),
    ("worst", Adj), ("big", Adj), ("small", Adj), ("new", Adj), ("old", Adj), ("great", Adj),
    ("little", Adj), ("large", Adj), ("long", Adj), ("high", Adj), ("young", Adj),
    ("happy", Adj), ("different", Adj), ("same", Adj), ("important", Adj), ("other", Adj),
];

const POS_SUFFIXES: &[(&str, UPos)] = &[
    ("ly", Adv),
    ("ing", Verb),
    ("ed", Verb),
    ("ize", Verb),
    ("ise", Verb),
    ("ify", Verb),
    ("ous", Adj),
    ("ful", Adj),
    ("ive", Adj),
    ("able", Adj),
    ("ible", Adj),
    ("ical", Adj),
    ("less", Adj),
    ("ish", Adj),
    ("ic", Adj),
    ("tion", Noun),
    ("sion", Noun),
    ("ment", Noun),
    ("ness", Noun),
    ("ity", Noun),
    ("ship", Noun),
];

const LEMMA_EXCEPTIONS: &[(&str, &str)] = &[
    ("is", "be"), ("am", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("'m", "be"), ("’m", "be"), ("'re", "be"), ("’re", "be"),
    ("'ve", "have"), ("’ve", "have"), ("'ll", "will"), ("’ll", "will"), ("'d", "would"),
    ("’d", "would"), ("n't", "not"), ("n’t", "not"), ("ca", "can"), ("wo", "will"),
    ("has", "have"), ("had", "have"), ("having", "have"), ("does", "do"), ("did", "do"),
    ("done", "do"), ("doing", "do"), ("goes", "go"), ("went", "go"), ("gone", "go"),
    ("said", "say"), ("says", "say"), ("made", "make"), ("making", "make"), ("took", "take"),
    ("taken", "take"), ("taking", "take"), ("saw", "see"), ("seen", "see"), ("came", "come"),
    ("coming", "come"), ("got", "get"), ("getting", "get"), ("knew", "know"),
    ("known", "know"), ("thought", "think"), ("gave", "give"), ("given", "give"),
    ("giving", "give"), ("found", "find"), ("told", "tell"), ("became", "become"),
    ("left", "leave"), ("felt", "feel"), ("brought", "bring"), ("began", "begin"),
    ("begun", "begin"), ("kept", "keep"), ("held", "hold"), ("wrote", "write"),
    ("written", "write"), ("writing", "write"), ("stood", "stand"), ("heard", "hear"),
    ("meant", "mean"), ("met", "meet"), ("ran", "run"), ("running", "run"), ("paid", "pay"),
    ("sat", "sit"), ("sitting", "sit"), ("spoke", "speak"), ("spoken", "speak"),
    ("led", "lead"), ("grew", "grow"), ("lost", "lose"), ("fell", "fall"), ("sent", "send"),
    ("built", "build"), ("understood", "understand"), ("ate", "eat"), ("eaten", "eat"),
    ("bought", "buy"), ("loved", "love"), ("living", "live"), ("used", "use"),
    ("children", "child"), ("men", "man"), ("women", "woman"), ("mice", "mouse"),
    ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"), ("news", "news"),
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("me", "i"), ("him", "he"), ("her", "she"), ("us", "we"), ("them", "they"),
];

const LEMMA_RULES: &[SuffixRule] = &[
    // Substantivos: plural regular
    rule(Noun, "sses", "ss", 1),
    rule(Noun, "ss", "ss", 1),
    rule(Noun, "us", "us", 1),
    rule(Noun, "is", "is", 1),
    rule(Noun, "ies", "y", 2),
    rule(Noun, "xes", "x", 1),
    rule(Noun, "ches", "ch", 1),
    rule(Noun, "shes", "sh", 1),
    rule(Noun, "s", "", 2),
    // Verbos: 3ª pessoa, gerúndio, passado
    rule(Verb, "ies", "y", 2),
    rule(Verb, "ied", "y", 2),
    rule(Verb, "sses", "ss", 1),
    rule(Verb, "ches", "ch", 1),
    rule(Verb, "shes", "sh", 1),
    rule(Verb, "xes", "x", 1),
    rule(Verb, "ss", "ss", 1),
    rule(Verb, "eed", "eed", 1),
    rule(Verb, "ing", "", 3),
    rule(Verb, "ed", "", 3),
    rule(Verb, "s", "", 2),
    // Adjetivos: comparativo e superlativo em -y
    rule(Adj, "iest", "y", 2),
    rule(Adj, "ier", "y", 2),
];

const GAZETTEER: &[(&str, EntityCategory)] = &[
    // Pessoas
    ("barack obama", Per), ("obama", Per), ("barack", Per), ("joe biden", Per),
    ("biden", Per), ("donald trump", Per), ("trump", Per), ("elon musk", Per), ("musk", Per),
    ("bill gates", Per), ("steve jobs", Per), ("william shakespeare", Per),
    ("shakespeare", Per), ("albert einstein", Per), ("einstein", Per),
    ("isaac newton", Per), ("newton", Per), ("vladimir putin", Per), ("putin", Per),
    ("leo tolstoy", Per), ("tolstoy", Per), ("alexander pushkin", Per), ("pushkin", Per),
    ("john", Per), ("mary", Per), ("alice", Per), ("bob", Per), ("james", Per),
    ("michael", Per), ("david", Per), ("sarah", Per), ("emma", Per),
    // Lugares (GPE)
    ("london", Loc), ("paris", Loc), ("berlin", Loc), ("moscow", Loc), ("new york", Loc),
    ("new york city", Loc), ("washington", Loc), ("los angeles", Loc),
    ("san francisco", Loc), ("chicago", Loc), ("boston", Loc), ("tokyo", Loc),
    ("beijing", Loc), ("rome", Loc), ("madrid", Loc), ("kyiv", Loc), ("kiev", Loc),
    ("saint petersburg", Loc), ("st. petersburg", Loc), ("england", Loc), ("britain", Loc),
    ("great britain", Loc), ("united kingdom", Loc), ("uk", Loc), ("usa", Loc),
    ("united states", Loc), ("united states of america", Loc), ("america", Loc),
    ("russia", Loc), ("china", Loc), ("france", Loc), ("germany", Loc), ("italy", Loc),
    ("spain", Loc), ("japan", Loc), ("india", Loc), ("canada", Loc), ("brazil", Loc),
    ("ukraine", Loc), ("europe", Loc), ("asia", Loc), ("africa", Loc), ("california", Loc),
    ("texas", Loc), ("florida", Loc),
    // Organizações
    ("google", Org), ("microsoft", Org), ("apple", Org), ("amazon", Org), ("facebook", Org),
    ("tesla", Org), ("spacex", Org), ("openai", Org), ("ibm", Org), ("intel", Org),
    ("nvidia", Org), ("netflix", Org), ("twitter", Org), ("nasa", Org), ("fbi", Org),
    ("cia", Org), ("nato", Org), ("united nations", Org), ("european union", Org),
    ("world health organization", Org), ("bbc", Org), ("cnn", Org), ("reuters", Org),
    ("harvard", Org), ("harvard university", Org), ("oxford university", Org), ("mit", Org),
    ("stanford", Org), ("stanford university", Org),
    // Nacionalidades e grupos (NORP)
    ("american", Misc), ("americans", Misc), ("russian", Misc), ("russians", Misc),
    ("english", Misc), ("british", Misc), ("french", Misc), ("german", Misc),
    ("germans", Misc), ("chinese", Misc), ("japanese", Misc), ("italian", Misc),
    ("spanish", Misc), ("european", Misc), ("europeans", Misc), ("ukrainian", Misc),
    ("christian", Misc), ("muslim", Misc), ("jewish", Misc), ("democrats", Misc),
    ("republicans", Misc),
];
