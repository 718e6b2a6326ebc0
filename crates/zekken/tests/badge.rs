use serde_json::json;
use zekken::layout::{BadgeRenderer, BadgeTree, ComposeOptions, RenderError};
use zekken::{BadgeConfig, BadgeError, Category, Engine};

/// Stand-in collaborator: serializes the tree instead of laying it out.
struct JsonRenderer;

impl BadgeRenderer for JsonRenderer {
    fn render(&self, tree: &BadgeTree) -> Result<String, RenderError> {
        Ok(serde_json::to_string(tree)?)
    }
}

struct FailingRenderer;

impl BadgeRenderer for FailingRenderer {
    fn render(&self, _tree: &BadgeTree) -> Result<String, RenderError> {
        Err("font cache poisoned".into())
    }
}

#[test]
fn full_pipeline_yields_a_renderable_tree() {
    let engine = Engine::new();
    let identity = engine
        .validate(Some("ハルウララ"), Some("7"), Some("g1"))
        .unwrap();

    let out = engine
        .render_svg(&identity, &ComposeOptions::default(), &JsonRenderer)
        .unwrap();
    let tree: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(tree["width"], json!(300.0));
    assert_eq!(tree["height"], json!(250.0));
    assert_eq!(tree["root"]["type"], json!("box"));
    assert_eq!(tree["root"]["style"]["backgroundColor"], json!("#132a63"));
    assert_eq!(tree["root"]["children"][0]["run"]["content"], json!("7"));
    assert_eq!(
        tree["root"]["children"][1]["run"]["content"],
        json!("ハルウララ")
    );
}

#[test]
fn render_badge_is_the_one_shot_pipeline() {
    let engine = Engine::new();
    let options = ComposeOptions {
        race: Some("高知ファイナル".to_string()),
    };
    let out = engine
        .render_badge(
            Some("ハルウララ"),
            Some("11"),
            Some("normal"),
            &options,
            &JsonRenderer,
        )
        .unwrap();
    let tree: serde_json::Value = serde_json::from_str(&out).unwrap();

    let children = tree["root"]["children"].as_array().unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0]["run"]["content"], json!("高知ファイナル"));
    assert_eq!(children[1]["run"]["content"], json!("11"));
    // Two digits: the number shifts to the long offset.
    assert_eq!(children[1]["style"]["x"], json!(66.0));
    assert_eq!(tree["root"]["style"]["backgroundColor"], json!("#ffffff"));
}

#[test]
fn layout_spec_matches_the_name_length_table() {
    let engine = Engine::new();
    // (name, expected layout golden)
    let cases = [
        (
            "アア",
            json!({
                "theme": { "backgroundColor": "#132a63", "fontColor": "#ffffff" },
                "numberX": 108.0,
                "numberY": 28.0,
                "nameFontSize": 24.0,
                "nameMarginTop": 70.0,
                "nameMarginLeft": 100.0,
                "renderedName": "ア  ア"
            }),
        ),
        (
            "キセキ",
            json!({
                "theme": { "backgroundColor": "#132a63", "fontColor": "#ffffff" },
                "numberX": 108.0,
                "numberY": 28.0,
                "nameFontSize": 24.0,
                "nameMarginTop": 70.0,
                "nameMarginLeft": 70.0,
                "renderedName": "キ  セ  キ"
            }),
        ),
        (
            "ウオッカ",
            json!({
                "theme": { "backgroundColor": "#132a63", "fontColor": "#ffffff" },
                "numberX": 108.0,
                "numberY": 28.0,
                "nameFontSize": 22.0,
                "nameMarginTop": 75.0,
                "nameMarginLeft": 40.0,
                "renderedName": "ウ  オ  ッ  カ"
            }),
        ),
        (
            "ハルウララ",
            json!({
                "theme": { "backgroundColor": "#132a63", "fontColor": "#ffffff" },
                "numberX": 108.0,
                "numberY": 28.0,
                "nameFontSize": 22.0,
                "nameMarginTop": 75.0,
                "nameMarginLeft": 10.0,
                "renderedName": "ハルウララ"
            }),
        ),
        (
            "カブラヤオー",
            json!({
                "theme": { "backgroundColor": "#132a63", "fontColor": "#ffffff" },
                "numberX": 108.0,
                "numberY": 28.0,
                "nameFontSize": 22.0,
                "nameMarginTop": 75.0,
                "nameMarginLeft": 24.0,
                "renderedName": "カブラヤオー"
            }),
        ),
        (
            "オグリキャップ",
            json!({
                "theme": { "backgroundColor": "#132a63", "fontColor": "#ffffff" },
                "numberX": 108.0,
                "numberY": 28.0,
                "nameFontSize": 20.0,
                "nameMarginTop": 80.0,
                "nameMarginLeft": 12.0,
                "renderedName": "オグリキャップ"
            }),
        ),
        (
            "トウカイテイオー",
            json!({
                "theme": { "backgroundColor": "#132a63", "fontColor": "#ffffff" },
                "numberX": 108.0,
                "numberY": 28.0,
                "nameFontSize": 20.0,
                "nameMarginTop": 80.0,
                "nameMarginLeft": 0.0,
                "renderedName": "トウカイテイオー"
            }),
        ),
        (
            "スペシャルウィーク",
            json!({
                "theme": { "backgroundColor": "#132a63", "fontColor": "#ffffff" },
                "numberX": 108.0,
                "numberY": 28.0,
                "nameFontSize": 17.0,
                "nameMarginTop": 100.0,
                "nameMarginLeft": 5.0,
                "renderedName": "スペシャルウィーク"
            }),
        ),
    ];

    for (name, expected) in cases {
        let identity = engine.validate(Some(name), Some("1"), None).unwrap();
        let spec = engine.resolve(&identity);
        assert_eq!(serde_json::to_value(&spec).unwrap(), expected, "{name}");
    }
}

#[test]
fn validation_errors_surface_verbatim() {
    let engine = Engine::new();

    let err = engine.validate(None, Some("7"), None).unwrap_err();
    assert!(matches!(err, BadgeError::Validation(_)));
    assert_eq!(err.to_string(), "名前は2 ~ 9文字です");

    let err = engine
        .validate(Some("ハルウララ"), Some("7th"), None)
        .unwrap_err();
    assert_eq!(err.to_string(), "ゼッケン番号は数字のみです");

    let err = engine
        .validate(Some("ハルウララ"), Some("7"), Some("sprint"))
        .unwrap_err();
    assert_eq!(err.to_string(), "不明なゼッケン種別です: sprint");
}

#[test]
fn renderer_failures_are_opaque_with_the_cause_retained() {
    let engine = Engine::new();
    let identity = engine
        .validate(Some("ハルウララ"), Some("7"), None)
        .unwrap();

    let err = engine
        .render_svg(&identity, &ComposeOptions::default(), &FailingRenderer)
        .unwrap_err();

    assert!(matches!(err, BadgeError::Render(_)));
    assert_eq!(err.to_string(), "badge rendering failed");
    let source = std::error::Error::source(&err).expect("cause retained");
    assert_eq!(source.to_string(), "font cache poisoned");
}

#[test]
fn configured_default_category_is_substituted() {
    let engine = Engine::new();
    let identity = engine
        .validate(Some("ハルウララ"), Some("7"), None)
        .unwrap();
    assert_eq!(identity.category(), Category::Classic);

    let engine = Engine::new().with_config(BadgeConfig {
        default_category: Category::G3,
    });
    let identity = engine
        .validate(Some("ハルウララ"), Some("7"), None)
        .unwrap();
    assert_eq!(identity.category(), Category::G3);

    // An explicit type always wins over the default.
    let identity = engine
        .validate(Some("ハルウララ"), Some("7"), Some("derby"))
        .unwrap();
    assert_eq!(identity.category(), Category::Derby);
}

#[test]
fn composition_is_deterministic() {
    let engine = Engine::new();
    let identity = engine
        .validate(Some("トウカイテイオー"), Some("18"), Some("g2"))
        .unwrap();
    let options = ComposeOptions {
        race: Some("有馬記念".to_string()),
    };
    assert_eq!(
        engine.compose(&identity, &options),
        engine.compose(&identity, &options)
    );
}
