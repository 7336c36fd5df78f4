//! Integration tests for the CSV → JSON → cart pipeline
//!
//! These tests drive the public API end to end:
//! - Transforming a CSV fixture into the grouped document
//! - The JSON shape consumed by front ends
//! - Writing and reloading the document through the file boundary
//! - Ordering from the reloaded document

use pizza_menu::cart::{MenuCartController, SizeTier, WhatsAppLink};
use pizza_menu::cli::transform_file;
use pizza_menu::menu::models::{DiagnosticKind, PLACEHOLDER_IMAGE};
use pizza_menu::menu::{store, transform_csv, PricingMode};
use serde_json::{json, Value};

const HEADER: &str =
    "ID,Name,CategoryTitle,CategoryKey,Price30cm,Price40cm,Price50cm,Tag,IsSpecial,imageURL";

/// Two categories, five items, interleaved rows
fn fixture() -> String {
    [
        HEADER,
        "1,Маргарита,,classics,300,420,560,,,../images/margherita.webp",
        "2,Вегетаријана,,veggie,320,440,590,\"Препорака\",true,",
        "3,Капричоза,,classics,350,470,610,,,",
        "4,Фунги,,veggie,310,430,570,Ново,false,",
        "5,Пеперони,,classics,360,480,620,,,",
    ]
    .join("\n")
}

#[test]
fn test_two_categories_five_items() {
    let parsed = transform_csv(&fixture());
    assert!(parsed.diagnostics.is_empty());

    let menu = &parsed.value.menu_data;
    let keys: Vec<_> = menu.categories.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["classics", "veggie"]);

    let classics = menu.category("classics").unwrap();
    let ids: Vec<_> = classics.items.iter().map(|i| i.id.unwrap()).collect();
    assert_eq!(ids, vec![1, 3, 5]);

    let veggie = menu.category("veggie").unwrap();
    let ids: Vec<_> = veggie.items.iter().map(|i| i.id.unwrap()).collect();
    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn test_json_shape() {
    let parsed = transform_csv(&fixture());
    let value = serde_json::to_value(&parsed.value).unwrap();

    let classics = &value["menuData"]["classics"];
    assert_eq!(classics["title"], "Класични Пици");
    assert_eq!(
        classics["items"][0],
        json!({
            "id": 1,
            "name": "Маргарита",
            "imageUrl": "../images/margherita.webp",
            "prices": [300, 420, 560]
        })
    );
    assert_eq!(classics["items"][1]["imageUrl"], PLACEHOLDER_IMAGE);

    let veggie_item = &value["menuData"]["veggie"]["items"][0];
    assert_eq!(veggie_item["tag"], "Препорака");
    assert_eq!(veggie_item["isSpecial"], true);
    assert!(value["menuData"]["veggie"]["items"][1].get("isSpecial").is_none());
}

#[test]
fn test_category_order_survives_serialization() {
    let text = [
        HEADER,
        "1,A,,zeta,10,,,,,",
        "2,B,,alpha,20,,,,,",
        "3,C,,zeta,30,,,,,",
    ]
    .join("\n");
    let json = serde_json::to_string(&transform_csv(&text).value).unwrap();
    let zeta = json.find("\"zeta\"").unwrap();
    let alpha = json.find("\"alpha\"").unwrap();
    assert!(zeta < alpha);

    let reloaded = MenuCartController::from_json(&json).unwrap();
    let keys: Vec<_> = reloaded
        .menu()
        .menu_data
        .categories
        .iter()
        .map(|c| c.key.clone())
        .collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}

#[test]
fn test_pricing_modes() {
    let text = [
        HEADER,
        "1,Tiered,,classics,300,400,500,,,",
        "2,Slice,,pizza_slices,90,0,,,,",
        "3,LateSingle,,pizza_slices,,,150,,,",
        "4,NoPrice,,pizza_slices,0,abc,,,,",
    ]
    .join("\n");
    let parsed = transform_csv(&text);
    let menu = &parsed.value.menu_data;

    assert_eq!(
        menu.find_item(1).unwrap().pricing,
        PricingMode::Tiered([300, 400, 500])
    );
    assert_eq!(menu.find_item(2).unwrap().pricing, PricingMode::Single(90));
    assert_eq!(menu.find_item(3).unwrap().pricing, PricingMode::Single(150));
    assert!(menu.find_item(4).is_none());

    let value = serde_json::to_value(&parsed.value).unwrap();
    let slice = &value["menuData"]["pizza_slices"]["items"][0];
    assert_eq!(slice["singlePrice"], 90);
    assert!(slice.get("prices").is_none());

    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].line, 5);
    assert_eq!(parsed.diagnostics[0].kind, DiagnosticKind::NoPrice);
}

#[test]
fn test_missing_required_fields_are_excluded_before_pricing() {
    let text = [
        HEADER,
        ",NoId,,classics,0,0,0,,,",
        "2,NoKey,,,100,200,300,,,",
    ]
    .join("\n");
    let parsed = transform_csv(&text);
    assert!(parsed.value.menu_data.is_empty());
    let kinds: Vec<_> = parsed.diagnostics.iter().map(|d| d.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::MissingField("ID"),
            DiagnosticKind::MissingField("CategoryKey")
        ]
    );
}

#[test]
fn test_title_resolution_branches() {
    let text = [
        HEADER,
        "1,A,Наши специјалитети,house,100,,,,,",
        "2,B,,premium,100,,,,,",
        "3,C,,calzone,100,,,,,",
    ]
    .join("\n");
    let menu = transform_csv(&text).value.menu_data;
    assert_eq!(menu.category("house").unwrap().title, "Наши специјалитети");
    assert_eq!(menu.category("premium").unwrap().title, "Премиум Пици");
    assert_eq!(menu.category("calzone").unwrap().title, "calzone");
}

#[test]
fn test_header_only_gives_empty_mapping() {
    let parsed = transform_csv(&format!("{HEADER}\r\n"));
    assert!(parsed.value.menu_data.is_empty());
    let value = serde_json::to_value(&parsed.value).unwrap();
    assert_eq!(value, json!({ "menuData": {} }));
}

#[tokio::test]
async fn test_transform_file_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("result.csv");
    let out = dir.path().join("menuData.json");
    std::fs::write(&csv, fixture()).unwrap();

    let document = transform_file(&csv, &out).await.unwrap();
    assert_eq!(document.menu_data.item_count(), 5);

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("{\n  \"menuData\": {"));
    let value: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["menuData"]["veggie"]["items"].as_array().unwrap().len(), 2);

    let reloaded = store::load_document(&out).await.unwrap();
    assert_eq!(reloaded, document);
}

#[tokio::test]
async fn test_missing_source_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = transform_file(&dir.path().join("result.csv"), &dir.path().join("out.json"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(!dir.path().join("out.json").exists());
}

#[tokio::test]
async fn test_load_failure_yields_no_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menuData.json");
    std::fs::write(&path, "{ \"menuData\": ").unwrap();
    assert!(store::load_document(&path).await.is_err());
}

#[test]
fn test_order_from_transformed_menu() {
    let json = serde_json::to_string(&transform_csv(&fixture()).value).unwrap();
    let mut controller = MenuCartController::from_json(&json).unwrap();

    controller.select_tier(3, SizeTier::Family).unwrap();
    let first = controller.add_to_cart(3, "classics").unwrap();
    controller.add_to_cart(2, "veggie").unwrap();
    assert_eq!(controller.cart_total(), 470 + 320);

    let summary = controller.build_order_summary().unwrap();
    assert_eq!(summary.lines.len(), 2);
    assert_eq!(summary.lines[0].size_label, "Фамилијарна (40cm)");
    assert_eq!(summary.total, 790);

    let link = controller
        .checkout(&mut WhatsAppLink::new("38970945499"))
        .unwrap();
    assert!(link.contains("%D0%92%D0%BA%D1%83%D0%BF%D0%BD%D0%BE%3A%20790"));

    assert!(controller.remove_from_cart(first));
    assert_eq!(controller.cart_total(), 320);
}
