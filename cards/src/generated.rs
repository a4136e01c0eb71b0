//! Statically compiled card data from cards.json.
//! Generated at build time by build.rs, so no JSON is parsed at runtime.

include!(concat!(env!("OUT_DIR"), "/cards_generated.rs"));
