//! BaseVocabulary - the shared, built-once base table
//!
//! The compiled-in table is indexed and its automaton is built eagerly, in
//! place, the first time anyone asks for it. After that it is only ever
//! read. Registries extend it by path copying instead of rebuilding.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::entry::{Entry, Symbol};
use super::table::Vocabulary;
use crate::scanner::Automaton;

/// glyph, description, aliases, category, tags
type Row = (
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static [&'static str],
);

const SMILEYS: &str = "Smileys & Emotion";
const PEOPLE: &str = "People & Body";
const NATURE: &str = "Animals & Nature";
const FOOD: &str = "Food & Drink";
const TRAVEL: &str = "Travel & Places";
const ACTIVITIES: &str = "Activities";
const OBJECTS: &str = "Objects";
const SYMBOLS: &str = "Symbols";

#[rustfmt::skip]
static TABLE: &[Row] = &[
    ("😀", "grinning face", &["grinning"], SMILEYS, &["smile", "happy"]),
    ("😄", "grinning face with smiling eyes", &["smile"], SMILEYS, &["happy", "joy"]),
    ("😂", "face with tears of joy", &["joy"], SMILEYS, &["laugh", "tears"]),
    ("😉", "winking face", &["wink"], SMILEYS, &["flirt"]),
    ("😍", "smiling face with heart-eyes", &["heart_eyes"], SMILEYS, &["love", "crush"]),
    ("😎", "smiling face with sunglasses", &["sunglasses"], SMILEYS, &["cool"]),
    ("🤔", "thinking face", &["thinking"], SMILEYS, &[]),
    ("😢", "crying face", &["cry"], SMILEYS, &["sad", "tear"]),
    ("😱", "face screaming in fear", &["scream"], SMILEYS, &["horror", "shocked"]),
    ("❤️", "red heart", &["heart"], SMILEYS, &["love"]),
    ("💥", "collision", &["boom", "collision"], SMILEYS, &["explode"]),
    ("👍", "thumbs up", &["+1", "thumbsup"], PEOPLE, &["approve", "ok"]),
    ("👎", "thumbs down", &["-1", "thumbsdown"], PEOPLE, &["disapprove"]),
    ("👏", "clapping hands", &["clap"], PEOPLE, &["praise", "applause"]),
    ("👋", "waving hand", &["wave"], PEOPLE, &["goodbye"]),
    ("🙏", "folded hands", &["pray"], PEOPLE, &["please", "hope"]),
    ("🐭", "mouse face", &["mouse"], NATURE, &[]),
    ("🐁", "mouse", &["mouse2"], NATURE, &[]),
    ("🐱", "cat face", &["cat"], NATURE, &["pet"]),
    ("🐈", "cat", &["cat2"], NATURE, &[]),
    ("🐶", "dog face", &["dog"], NATURE, &["pet"]),
    ("🐎", "horse", &["racehorse"], NATURE, &["speed"]),
    ("🐴", "horse face", &["horse"], NATURE, &[]),
    ("🦄", "unicorn", &["unicorn"], NATURE, &[]),
    ("🐛", "bug", &["bug"], NATURE, &[]),
    ("🌸", "cherry blossom", &["cherry_blossom"], NATURE, &["flower", "spring"]),
    ("🌵", "cactus", &["cactus"], NATURE, &[]),
    ("🍂", "fallen leaf", &["fallen_leaf"], NATURE, &["autumn"]),
    ("☁️", "cloud", &["cloud"], TRAVEL, &["weather"]),
    ("🔥", "fire", &["fire"], TRAVEL, &["burn"]),
    ("🌈", "rainbow", &["rainbow"], TRAVEL, &[]),
    ("🚀", "rocket", &["rocket"], TRAVEL, &["ship", "launch"]),
    ("🚲", "bicycle", &["bike"], TRAVEL, &["bicycle"]),
    ("🍿", "popcorn", &["popcorn"], FOOD, &["movie"]),
    ("🌽", "ear of corn", &["corn"], FOOD, &["plant"]),
    ("🍊", "tangerine", &["tangerine", "orange", "mandarin"], FOOD, &["fruit"]),
    ("🍎", "red apple", &["apple"], FOOD, &["fruit"]),
    ("🍕", "pizza", &["pizza"], FOOD, &[]),
    ("🌮", "taco", &["taco"], FOOD, &["mexican"]),
    ("🍺", "beer mug", &["beer"], FOOD, &["drink"]),
    ("☕", "hot beverage", &["coffee"], FOOD, &["cafe", "espresso"]),
    ("🏇", "horse racing", &["horse_racing"], ACTIVITIES, &[]),
    ("🎉", "party popper", &["tada"], ACTIVITIES, &["hooray", "party"]),
    ("🎈", "balloon", &["balloon"], ACTIVITIES, &["party", "birthday"]),
    ("🏈", "american football", &["football"], ACTIVITIES, &["sports"]),
    ("🎮", "video game", &["video_game"], ACTIVITIES, &["play", "controller"]),
    ("🎩", "top hat", &["tophat"], OBJECTS, &["hat", "classy"]),
    ("📖", "open book", &["book", "open_book"], OBJECTS, &["read"]),
    ("🔍", "left-pointing magnifying glass", &["mag"], OBJECTS, &["search", "zoom"]),
    ("💽", "computer disk", &["minidisc"], OBJECTS, &[]),
    ("🖱️", "computer mouse", &["computer_mouse"], OBJECTS, &[]),
    ("💡", "light bulb", &["bulb"], OBJECTS, &["idea", "light"]),
    ("🔒", "locked", &["lock"], OBJECTS, &["security", "private"]),
    ("🎵", "musical note", &["musical_note"], OBJECTS, &["music"]),
    ("🎶", "musical notes", &["notes"], OBJECTS, &["music"]),
    ("📌", "pushpin", &["pushpin"], OBJECTS, &["location"]),
    ("❗", "exclamation mark", &["exclamation", "heavy_exclamation_mark"], SYMBOLS, &["bang"]),
    ("❓", "question mark", &["question"], SYMBOLS, &["confused"]),
    ("✅", "check mark button", &["white_check_mark"], SYMBOLS, &[]),
    ("⚠️", "warning", &["warning"], SYMBOLS, &["wip"]),
    ("🆑", "CL button", &["cl"], SYMBOLS, &[]),
    ("💯", "hundred points", &["100"], SYMBOLS, &["score", "perfect"]),
];

static BUILTIN: OnceLock<Arc<BaseVocabulary>> = OnceLock::new();

/// A base table and the automaton over all of its keys.
#[derive(Debug, Default)]
pub struct BaseVocabulary {
    pub(crate) vocab: Vocabulary,
    pub(crate) automaton: Automaton,
}

impl BaseVocabulary {
    /// The process-wide built-in base, initialized on first use.
    pub fn builtin() -> &'static Arc<BaseVocabulary> {
        BUILTIN.get_or_init(|| {
            let base = Self::from_rows(TABLE);
            debug!(
                entries = base.vocab.len(),
                keys = base.automaton.len(),
                "builtin vocabulary initialized"
            );
            Arc::new(base)
        })
    }

    /// An empty base, for registries that should not see the built-in table.
    pub fn empty() -> Arc<BaseVocabulary> {
        Arc::new(Self::default())
    }

    fn from_rows(rows: &[Row]) -> Self {
        let mut vocab = Vocabulary::default();
        for &(glyph, description, aliases, category, tags) in rows {
            vocab.insert(Entry::new(
                Symbol::Glyph(glyph.to_string()),
                description,
                aliases,
                Some(category),
                tags,
            ));
        }
        Self::from_vocabulary(vocab)
    }

    /// Eagerly build the automaton over every key of `vocab`.
    pub(crate) fn from_vocabulary(vocab: Vocabulary) -> Self {
        let automaton = Automaton::build(vocab.keys().map(|(key, _)| key));
        Self { vocab, automaton }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }
}
