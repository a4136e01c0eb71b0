//! Build script: reads cards.json and generates Rust source code that
//! statically constructs the built-in card catalog.
//! Malformed card data fails the build instead of surfacing at runtime.

use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::Path;

// ── JSON schema types (build-time only) ──────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct JsonCard {
    id: String,
    name: String,
    description: Option<String>,
    attack: i32,
    defense: i32,
    image: Option<String>,
    types: Vec<String>,
    rarity: String,
    keywords: Vec<String>,
    #[serde(default)]
    behaviors: Vec<JsonBehavior>,
    art: Option<String>,
    set: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonBehavior {
    id: String,
    trigger: JsonTrigger,
    effect: JsonTyped,
    stackable: Option<bool>,
    max_stacks: Option<u32>,
}

#[derive(Deserialize)]
struct JsonTrigger {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    conditions: Vec<JsonTyped>,
}

/// Shape shared by effects and conditions
#[derive(Deserialize)]
struct JsonTyped {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    params: serde_json::Map<String, Value>,
}

// ── Code generation helpers ──────────────────────────────────────────────────

/// `on_turn_start` -> `OnTurnStart`
fn pascal_case(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn gen_string(value: &str) -> String {
    format!("String::from({value:?})")
}

fn gen_option_string(value: &Option<String>) -> String {
    match value {
        Some(s) => format!("Some({})", gen_string(s)),
        None => "None".to_string(),
    }
}

fn gen_string_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| gen_string(v)).collect();
    format!("vec![{}]", items.join(", "))
}

fn gen_param_value(value: &Value) -> String {
    match value {
        Value::Bool(b) => format!("ParamValue::Bool({b})"),
        Value::Number(n) => {
            let int = n
                .as_i64()
                .unwrap_or_else(|| panic!("Only integer params are supported, got {n}"));
            format!("ParamValue::Int({int})")
        }
        Value::String(s) => format!("ParamValue::Text({})", gen_string(s)),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(gen_param_value).collect();
            format!("ParamValue::List(vec![{}])", items.join(", "))
        }
        Value::Object(map) => format!("ParamValue::Map({})", gen_params(map)),
        Value::Null => panic!("null is not a valid param value"),
    }
}

fn gen_params(params: &serde_json::Map<String, Value>) -> String {
    if params.is_empty() {
        return "BTreeMap::new()".to_string();
    }
    let entries: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("({}, {})", gen_string(key), gen_param_value(value)))
        .collect();
    format!("BTreeMap::from([{}])", entries.join(", "))
}

fn gen_condition(condition: &JsonTyped) -> String {
    format!(
        "Condition {{ kind: ConditionType::{}, params: {} }}",
        pascal_case(&condition.kind),
        gen_params(&condition.params)
    )
}

fn gen_behavior(behavior: &JsonBehavior) -> String {
    let conditions: Vec<String> = behavior.trigger.conditions.iter().map(gen_condition).collect();
    let stackable = match behavior.stackable {
        Some(b) => format!("Some({b})"),
        None => "None".to_string(),
    };
    let max_stacks = match behavior.max_stacks {
        Some(n) => format!("Some({n})"),
        None => "None".to_string(),
    };

    format!(
        r#"Behavior {{
                    id: {id},
                    trigger: Trigger {{
                        kind: TriggerType::{trigger},
                        conditions: vec![{conditions}],
                    }},
                    effect: Effect {{
                        kind: EffectType::{effect},
                        params: {params},
                    }},
                    stackable: {stackable},
                    max_stacks: {max_stacks},
                }}"#,
        id = gen_string(&behavior.id),
        trigger = pascal_case(&behavior.trigger.kind),
        conditions = conditions.join(", "),
        effect = pascal_case(&behavior.effect.kind),
        params = gen_params(&behavior.effect.params),
    )
}

fn gen_card(card: &JsonCard) -> String {
    let behaviors: Vec<String> = card.behaviors.iter().map(gen_behavior).collect();
    let behaviors_str = if behaviors.is_empty() {
        "vec![]".to_string()
    } else {
        format!(
            "vec![\n                {}\n            ]",
            behaviors.join(",\n                ")
        )
    };

    format!(
        r#"        Card {{
            id: CardId::from({id:?}),
            name: {name},
            description: {description},
            attack: {attack},
            defense: {defense},
            image: {image},
            source_file: None,
            types: {types},
            rarity: Rarity::{rarity},
            keywords: {keywords},
            behaviors: {behaviors_str},
            art: {art},
            set: {set},
        }}"#,
        id = card.id,
        name = gen_string(&card.name),
        description = gen_option_string(&card.description),
        attack = card.attack,
        defense = card.defense,
        image = gen_option_string(&card.image),
        types = gen_string_list(&card.types),
        rarity = pascal_case(&card.rarity),
        keywords = gen_string_list(&card.keywords),
        art = gen_option_string(&card.art),
        set = gen_option_string(&card.set),
    )
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let cards_path = Path::new(&manifest_dir).join("cards.json");

    println!("cargo:rerun-if-changed={}", cards_path.display());

    let cards_json = fs::read_to_string(&cards_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", cards_path.display()));
    let cards: Vec<JsonCard> =
        serde_json::from_str(&cards_json).expect("Failed to parse cards.json");

    let card_entries: Vec<String> = cards.iter().map(gen_card).collect();

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("cards_generated.rs");

    let generated = format!(
        r#"// Auto-generated from cards.json by build.rs. DO NOT EDIT
#[allow(unused_imports)]
use std::collections::BTreeMap;
use clash_battle::types::*;

/// Returns every card defined in cards.json, in file order.
pub fn builtin_cards() -> Vec<Card> {{
    vec![
{}
    ]
}}
"#,
        card_entries.join(",\n"),
    );

    fs::write(&dest, generated).expect("Failed to write generated cards file");
}
