/*
    core_nlq - Natural-language query parsing

    Translates a closed set of English phrases into filter criteria.
    There is no general language understanding here: five fixed phrase
    templates, matched whole, in priority order. Contradictory
    assignments are surfaced as conflicts rather than silently resolved.
*/

mod grammar;
mod parser;

pub use parser::{parse, ParsedQuery};
