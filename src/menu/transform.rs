//! Row normalization and category grouping.

use super::helpers::{parse_int_prefix, parse_price, resolve_category_title};
use super::models::{
    Diagnostic, DiagnosticKind, MenuData, MenuDocument, MenuItem, Parsed, PricingMode, RawRecord,
    PLACEHOLDER_IMAGE,
};
use super::parser::parse_rows;

/// Resolves the pricing of a row from its three tier columns.
///
/// All three tiers give [`PricingMode::Tiered`]; exactly one gives
/// [`PricingMode::Single`]; anything else has no price.
pub fn resolve_pricing(record: &RawRecord) -> Option<PricingMode> {
    let tiers = [
        parse_price(record.price30.as_deref()),
        parse_price(record.price40.as_deref()),
        parse_price(record.price50.as_deref()),
    ];
    match tiers {
        [Some(p30), Some(p40), Some(p50)] => Some(PricingMode::Tiered([p30, p40, p50])),
        _ => {
            let mut present = tiers.iter().flatten();
            match (present.next(), present.next()) {
                (Some(&price), None) => Some(PricingMode::Single(price)),
                _ => None,
            }
        }
    }
}

/// Builds a menu item from a raw row, or `None` when it has no price.
pub fn normalize(record: &RawRecord) -> Option<MenuItem> {
    let pricing = resolve_pricing(record)?;

    let tag = record.tag.clone().filter(|t| !t.is_empty());
    let is_special = tag.is_some()
        && record
            .is_special
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));

    let image_url = record
        .image_url
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    Some(MenuItem {
        id: record.id.as_deref().and_then(parse_int_prefix),
        name: record.name.clone().unwrap_or_default(),
        image_url,
        tag,
        is_special,
        pricing,
    })
}

/// Groups raw rows into a menu document.
///
/// Categories keep the order in which their key was first seen, items keep
/// row order. Rows without a resolvable price are dropped and reported.
pub fn transform(records: &[RawRecord]) -> Parsed<MenuDocument> {
    let mut menu_data = MenuData::default();
    let mut diagnostics = Vec::new();

    for record in records {
        let Some(key) = record.category_key.as_deref().filter(|k| !k.is_empty()) else {
            tracing::warn!(
                line = record.line,
                field = "CategoryKey",
                "skipping row with missing field"
            );
            diagnostics.push(Diagnostic {
                line: record.line,
                kind: DiagnosticKind::MissingField("CategoryKey"),
            });
            continue;
        };

        let Some(item) = normalize(record) else {
            tracing::warn!(
                line = record.line,
                name = record.name.as_deref().unwrap_or(""),
                "dropping item with no resolvable price"
            );
            diagnostics.push(Diagnostic {
                line: record.line,
                kind: DiagnosticKind::NoPrice,
            });
            continue;
        };

        menu_data
            .entry(key, || {
                resolve_category_title(record.category_title.as_deref(), key)
            })
            .items
            .push(item);
    }

    Parsed {
        value: MenuDocument { menu_data },
        diagnostics,
    }
}

/// Parses and transforms CSV text in one step, collecting the diagnostics of
/// both stages.
pub fn transform_csv(text: &str) -> Parsed<MenuDocument> {
    let rows = parse_rows(text);
    let mut document = transform(&rows.value);

    let mut diagnostics = rows.diagnostics;
    diagnostics.append(&mut document.diagnostics);
    diagnostics.sort_by_key(|d| d.line);

    Parsed {
        value: document.value,
        diagnostics,
    }
}
