//! Markdown card definitions.
//!
//! Each card is a level-two heading followed by its image and an optional
//! flavor quote:
//!
//! ```text
//! ## Ember Fox | 4/2 | Common
//! ![Ember Fox](https://cdn.example.com/cards/ember-fox.png)
//! > It nests in warm chimneys and mistakes sparks for constellations.
//! ```
//!
//! Lines that are not card headings are ignored. The format only carries
//! combat stats, rarity and art, so every other card field gets a default.

use std::collections::HashSet;

use clash_battle::types::{Card, Rarity};

use crate::error::{CardError, Result};
use crate::schema::validate_cards;

struct Heading<'a> {
    name: &'a str,
    attack: i32,
    defense: i32,
    rarity: &'a str,
}

/// `## <name> | <attack>/<defense> | <rarity>`
fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let rest = line.strip_prefix("##")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut columns = rest.rsplitn(3, '|');
    let rarity = columns.next()?.trim();
    let stats = columns.next()?;
    let name = columns.next()?.trim();

    let mut chars = rarity.chars();
    if !chars.next()?.is_ascii_alphabetic()
        || !chars.all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '-')
    {
        return None;
    }

    let (attack, defense) = stats.split_once('/')?;
    Some(Heading {
        name,
        attack: parse_stat(attack)?,
        defense: parse_stat(defense)?,
        rarity,
    })
}

fn parse_stat(text: &str) -> Option<i32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// `![<alt>](http(s)://<url>)`, returning alt text and url
///
/// The alt text ends at the first `](` that is followed by a valid url, so
/// alt text may itself contain `](`.
fn parse_image(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_end().strip_prefix("![")?;
    let first = rest.chars().next()?.len_utf8();

    rest.match_indices("](")
        .filter(|(split, _)| *split >= first)
        .find_map(|(split, _)| {
            let url = rest[split + 2..].strip_suffix(')')?;
            is_web_url(url).then_some((&rest[..split], url))
        })
}

fn is_web_url(url: &str) -> bool {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .is_some_and(|address| {
            !address.is_empty() && !address.contains(|c: char| c.is_whitespace() || c == ')')
        })
}

/// `> <text>`
fn parse_flavor(line: &str) -> Option<&str> {
    let text = line.strip_prefix('>')?.trim();
    (!text.is_empty()).then_some(text)
}

/// Lower-case slug: runs of anything but `a-z0-9` become one `-`.
fn to_card_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.push(c);
        } else {
            pending_dash = true;
        }
    }

    id
}

fn ensure_unique_id(base_id: String, seen_ids: &mut HashSet<String>) -> String {
    if seen_ids.insert(base_id.clone()) {
        return base_id;
    }

    let mut suffix = 2;
    while seen_ids.contains(&format!("{base_id}-{suffix}")) {
        suffix += 1;
    }

    let id = format!("{base_id}-{suffix}");
    seen_ids.insert(id.clone());
    id
}

/// Parse every card in `markdown`, tagging each with `source_file`.
pub fn parse_cards_markdown(markdown: &str, source_file: &str) -> Result<Vec<Card>> {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut cards = Vec::new();
    let mut used_ids = HashSet::new();

    let mut i = 0;
    while i < lines.len() {
        let Some(heading) = parse_heading(lines[i]) else {
            i += 1;
            continue;
        };

        let heading_line = i + 1;
        let image_line = i + 2;
        if heading.name.is_empty() {
            return Err(CardError::invalid(
                "",
                format!("card name must not be empty (line {heading_line})"),
            ));
        }

        let (alt, image) = lines
            .get(i + 1)
            .and_then(|line| parse_image(line))
            .ok_or(CardError::MissingImage {
                heading_line,
                image_line,
            })?;

        if alt.trim() != heading.name {
            return Err(CardError::AltTextMismatch {
                alt: alt.to_string(),
                name: heading.name.to_string(),
                line: image_line,
            });
        }

        let rarity = Rarity::from_name(heading.rarity).ok_or_else(|| CardError::InvalidRarity {
            rarity: heading.rarity.to_string(),
            line: heading_line,
        })?;

        let flavor = lines.get(i + 2).and_then(|line| parse_flavor(line));
        let id = ensure_unique_id(to_card_id(heading.name), &mut used_ids);

        let mut card =
            Card::new(&id, heading.name, heading.attack, heading.defense).with_rarity(rarity);
        card.description = flavor.map(str::to_string);
        card.image = Some(image.to_string());
        card.source_file = Some(source_file.to_string());
        cards.push(card);

        i += if flavor.is_some() { 3 } else { 2 };
    }

    log::debug!("parsed {} cards from {}", cards.len(), source_file);
    validate_cards(&cards)?;
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_multiple_cards() {
        let markdown = [
            "## Ember Fox | 4/2 | Common",
            "![Ember Fox](https://cdn.example.com/cards/ember-fox.png)",
            "> It nests in warm chimneys and mistakes sparks for constellations.",
            "",
            "## Stone Guardian | 2/8 | rare",
            "![Stone Guardian](https://cdn.example.com/cards/stone-guardian.png)",
        ]
        .join("\n");

        let cards = parse_cards_markdown(&markdown, "cards/core.md").unwrap();

        assert_eq!(cards.len(), 2);
        let fox = &cards[0];
        assert_eq!(fox.id.as_str(), "ember-fox");
        assert_eq!(fox.name, "Ember Fox");
        assert_eq!((fox.attack, fox.defense), (4, 2));
        assert_eq!(fox.rarity, Rarity::Common);
        assert_eq!(
            fox.description.as_deref(),
            Some("It nests in warm chimneys and mistakes sparks for constellations.")
        );
        assert_eq!(
            fox.image.as_deref(),
            Some("https://cdn.example.com/cards/ember-fox.png")
        );
        assert_eq!(fox.source_file.as_deref(), Some("cards/core.md"));
        assert_eq!(fox.types, vec!["unknown"]);
        assert!(fox.keywords.is_empty());
        assert!(fox.behaviors.is_empty());

        let guardian = &cards[1];
        assert_eq!(guardian.id.as_str(), "stone-guardian");
        assert_eq!(guardian.rarity, Rarity::Rare);
        assert_eq!(guardian.description, None);
    }

    #[test]
    fn test_creates_unique_ids_when_names_repeat() {
        let markdown = [
            "## Wolf Pup | 2/1 | Common",
            "![Wolf Pup](https://cdn.example.com/cards/wolf-pup-a.png)",
            "## Wolf Pup | 3/2 | Uncommon",
            "![Wolf Pup](https://cdn.example.com/cards/wolf-pup-b.png)",
        ]
        .join("\n");

        let cards = parse_cards_markdown(&markdown, "cards/dupes.md").unwrap();

        let ids: Vec<&str> = cards.iter().map(|card| card.id.as_str()).collect();
        assert_eq!(ids, vec!["wolf-pup", "wolf-pup-2"]);
    }

    #[test]
    fn test_missing_image_line() {
        let err = parse_cards_markdown("## Ember Fox | 4/2 | Common", "cards/broken.md").unwrap_err();
        assert!(err.to_string().contains("Missing or invalid image line"));
        assert!(matches!(
            err,
            CardError::MissingImage {
                heading_line: 1,
                image_line: 2
            }
        ));
    }

    #[test]
    fn test_alt_text_must_match_name() {
        let markdown = [
            "## Ember Fox | 4/2 | Common",
            "![Wrong Name](https://cdn.example.com/cards/ember-fox.png)",
        ]
        .join("\n");

        let err = parse_cards_markdown(&markdown, "cards/broken.md").unwrap_err();
        assert!(err.to_string().contains("does not match card name"));
    }

    #[test]
    fn test_unsupported_rarity() {
        let markdown = [
            "## Storm Oracle | 7/5 | Epic",
            "![Storm Oracle](https://cdn.example.com/cards/storm-oracle.png)",
        ]
        .join("\n");

        let err = parse_cards_markdown(&markdown, "cards/broken.md").unwrap_err();
        assert!(err.to_string().contains("Invalid rarity \"Epic\""));
    }

    #[test]
    fn test_non_card_lines_are_ignored() {
        let markdown = [
            "# Core Set",
            "### Not a card | 1/1 | Common",
            "## Missing stats | Common",
            "Some prose.",
            "## Tide Caller|1 / 3|legendary",
            "![Tide Caller](http://cards.example.com/tide.png)  ",
            ">   ",
        ]
        .join("\r\n");

        let cards = parse_cards_markdown(&markdown, "set.md").unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id.as_str(), "tide-caller");
        assert_eq!((cards[0].attack, cards[0].defense), (1, 3));
        assert_eq!(cards[0].rarity, Rarity::Legendary);
        assert_eq!(cards[0].description, None);
    }

    #[test]
    fn test_image_must_be_a_web_url() {
        assert!(parse_image("![Fox](ftp://example.com/fox.png)").is_none());
        assert!(parse_image("![Fox](https://example.com/a b.png)").is_none());
        assert!(parse_image("![](https://example.com/fox.png)").is_none());
        assert_eq!(
            parse_image("![Fox](https://example.com/fox.png)"),
            Some(("Fox", "https://example.com/fox.png"))
        );
    }

    #[test]
    fn test_blank_card_name_is_an_error() {
        let markdown = [
            "##   | 1/2 | common",
            "![Blank](https://cdn.example.com/cards/blank.png)",
        ]
        .join("\n");

        let err = parse_cards_markdown(&markdown, "cards/broken.md").unwrap_err();
        assert!(matches!(err, CardError::InvalidCard { .. }));
        assert!(err.to_string().contains("card name must not be empty (line 1)"));
    }

    #[test]
    fn test_alt_text_may_contain_link_brackets() {
        assert_eq!(
            parse_image("![a](b](https://x)"),
            Some(("a](b", "https://x"))
        );
        assert!(parse_image("![a](b](c)").is_none());

        let markdown = [
            "## Odd](Name | 2/2 | common",
            "![Odd](Name](https://cdn.example.com/cards/odd.png)",
        ]
        .join("\n");
        let cards = parse_cards_markdown(&markdown, "cards/odd.md").unwrap();
        assert_eq!(cards[0].name, "Odd](Name");
        assert_eq!(cards[0].id.as_str(), "odd-name");
        assert_eq!(
            cards[0].image.as_deref(),
            Some("https://cdn.example.com/cards/odd.png")
        );
    }

    #[test]
    fn test_card_ids_are_slugs() {
        assert_eq!(to_card_id("  Sir  Lance-a-Lot!! "), "sir-lance-a-lot");
        assert_eq!(to_card_id("R2 D2"), "r2-d2");
        assert_eq!(to_card_id("???"), "");
    }
}
