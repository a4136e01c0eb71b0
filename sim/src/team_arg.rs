//! Resolving `TEAM` command line arguments.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clash_battle::types::{Card, Team};
use clash_cards::{parse_lineup_from, team_from_json};

/// A team argument is either a JSON team file or a lineup such as
/// `goblin,knight;-,priest`.
pub fn load_team(arg: &str, pool: &[Card]) -> Result<Team> {
    if is_team_file(arg) {
        let json = fs::read_to_string(arg)
            .with_context(|| format!("failed to read team file {arg}"))?;
        return team_from_json(&json).with_context(|| format!("invalid team file {arg}"));
    }

    parse_lineup_from(arg, pool).with_context(|| format!("invalid lineup \"{arg}\""))
}

fn is_team_file(arg: &str) -> bool {
    Path::new(arg)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clash_cards::all_cards;

    #[test]
    fn test_lineup_argument() {
        let team = load_team("goblin,knight;priest", &all_cards()).unwrap();
        assert_eq!(team.lanes.len(), 2);
        assert_eq!(team.cards().count(), 3);
    }

    #[test]
    fn test_unknown_card_in_lineup() {
        let err = load_team("goblin,hydra", &all_cards()).unwrap_err();
        assert!(format!("{err:#}").contains("hydra"));
    }

    #[test]
    fn test_json_team_file() {
        let path = std::env::temp_dir().join(format!("clash-sim-team-{}.json", std::process::id()));
        let json = serde_json::json!({
            "lanes": [[{ "card": {
                "id": "ember-fox",
                "name": "Ember Fox",
                "attack": 4,
                "defense": 2,
                "types": ["beast"],
                "rarity": "common",
                "keywords": [],
                "behaviors": []
            } }, { "card": null }]]
        });
        fs::write(&path, json.to_string()).unwrap();

        let team = load_team(path.to_str().unwrap(), &[]).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(team.lanes[0].len(), 2);
        assert_eq!(team.cards().next().unwrap().id.as_str(), "ember-fox");
    }

    #[test]
    fn test_missing_team_file() {
        let err = load_team("no/such/team.JSON", &all_cards()).unwrap_err();
        assert!(err.to_string().contains("failed to read team file no/such/team.JSON"));
    }
}
