use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScriptureVerse {
    pub verse: String,
    pub text: String,
}

impl ScriptureVerse {
    pub fn new(verse: &str, text: &str) -> Self {
        ScriptureVerse {
            verse: verse.to_owned(),
            text: text.to_owned(),
        }
    }
}

/// Immutable reference tables the generator draws from.
///
/// The tables are plain data so alternative content sets can be
/// loaded without touching the generation logic.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    coffee_facts: Vec<String>,
    morning_verses: Vec<ScriptureVerse>,
}

impl ContentLibrary {
    pub fn new(coffee_facts: Vec<String>, morning_verses: Vec<ScriptureVerse>) -> Self {
        ContentLibrary {
            coffee_facts,
            morning_verses,
        }
    }

    pub fn bundled() -> Self {
        ContentLibrary {
            coffee_facts: COFFEE_FACTS.iter().map(|fact| (*fact).to_owned()).collect(),
            morning_verses: MORNING_VERSES
                .iter()
                .map(|(verse, text)| ScriptureVerse::new(verse, text))
                .collect(),
        }
    }

    pub fn pick_coffee_fact<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        self.coffee_facts.choose(rng).map(|fact| fact.as_str())
    }

    pub fn pick_morning_verse<R: Rng>(&self, rng: &mut R) -> Option<&ScriptureVerse> {
        self.morning_verses.choose(rng)
    }
}

const COFFEE_FACTS: &[&str] = &[
    "Coffee beans are actually seeds from coffee cherries, not beans at all.",
    "The word 'coffee' comes from the Arabic word 'qahwah' meaning 'wine of the bean'.",
    "Coffee was first discovered by an Ethiopian goat herder named Kaldi around 850 AD.",
    "Finland consumes the most coffee per capita in the world - about 12kg per person annually.",
    "Coffee plants can live and produce coffee for over 100 years.",
    "The most expensive coffee in the world is made from beans eaten and digested by elephants.",
    "Brazil produces about one-third of the world's coffee supply.",
    "Coffee loses its optimal flavor within 30 minutes of being brewed.",
    "The perfect water temperature for brewing coffee is between 195-205°F (90-96°C).",
    "Coffee was once considered the 'devil's drink' until Pope Clement VIII blessed it in 1600.",
];

const MORNING_VERSES: &[(&str, &str)] = &[
    (
        "Psalm 143:8",
        "Let the morning bring me word of your unfailing love, for I have put my trust in you. Show me the way I should go, for to you I entrust my life.",
    ),
    (
        "Lamentations 3:22-23",
        "Because of the Lord's great love we are not consumed, for his compassions never fail. They are new every morning; great is your faithfulness.",
    ),
    (
        "Isaiah 40:31",
        "But those who hope in the Lord will renew their strength. They will soar on wings like eagles; they will run and not grow weary, they will walk and not be faint.",
    ),
    (
        "Psalm 118:24",
        "This is the day the Lord has made; we will rejoice and be glad in it.",
    ),
    (
        "Matthew 11:28",
        "Come to me, all you who are weary and burdened, and I will give you rest.",
    ),
    (
        "Philippians 4:13",
        "I can do all this through him who gives me strength.",
    ),
    (
        "Jeremiah 29:11",
        "For I know the plans I have for you, declares the Lord, plans to prosper you and not to harm you, to give you hope and a future.",
    ),
    (
        "2 Corinthians 4:16",
        "Therefore we do not lose heart. Though outwardly we are wasting away, yet inwardly we are being renewed day by day.",
    ),
    (
        "Psalm 46:10",
        "Be still, and know that I am God; I will be exalted among the nations, I will be exalted in the earth.",
    ),
    (
        "Joshua 1:9",
        "Have I not commanded you? Be strong and courageous. Do not be afraid; do not be discouraged, for the Lord your God will be with you wherever you go.",
    ),
];
