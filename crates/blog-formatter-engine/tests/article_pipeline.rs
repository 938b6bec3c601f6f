use blog_formatter_engine::{
    ArticleMedia, FormattedArticle, ManualPlacements, PhotoAsset, PlacementPlan, RenderOptions,
    UnitKind, VideoAsset, format_article, parse_photo_links, render_html,
};
use pretty_assertions::assert_eq;

const PAULISTA_PHOTOS: [&str; 6] = [
    "paulista-1.jpg",
    "veridiana-pizza-2.jpg",
    "jardins-3.jpg",
    "masp-4.jpg",
    "bardi-5.jpg",
    "architecture-6.jpg",
];

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn paulista(media: &ArticleMedia) -> FormattedArticle {
    format_article(&fixture("paulista"), media, "Linear time is an invention").unwrap()
}

fn uploads(names: &[&str]) -> Vec<PhotoAsset> {
    names.iter().copied().map(PhotoAsset::upload).collect()
}

/// One line per unit: `Kind@anchor name, name`.
fn summarize(plan: &PlacementPlan) -> String {
    plan.units
        .iter()
        .map(|unit| {
            let names: Vec<&str> = unit
                .photo_assets()
                .map(|p| p.name.as_str())
                .chain(unit.video_asset().map(|v| v.embed_ref.as_str()))
                .collect();
            format!("{:?}@{} {}", unit.kind, unit.anchor, names.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn paulista_places_photos_in_pairs() {
    let media = ArticleMedia::new(uploads(&PAULISTA_PHOTOS), vec![]);

    let article = paulista(&media);

    insta::assert_snapshot!(summarize(&article.plan), @r"
    Double@1 paulista-1.jpg, veridiana-pizza-2.jpg
    Double@3 jardins-3.jpg, masp-4.jpg
    Double@5 bardi-5.jpg, architecture-6.jpg
    ");
    assert!(article.plan.overflow.is_empty());
    assert!(!article.document.has_gallery());
}

#[test]
fn paulista_promotes_the_quote() {
    let article = paulista(&ArticleMedia::default());

    let quotes: Vec<usize> = article
        .document
        .paragraphs()
        .filter(|p| p.is_quote)
        .map(|p| p.index)
        .collect();

    assert_eq!(article.document.title, "Paulista! Everything ends in pizza");
    assert_eq!(
        article.document.subtitle,
        "Pizzeria Veridiana, Jardins district, São Paulo"
    );
    assert_eq!(article.document.paragraphs().count(), 5);
    assert_eq!(quotes, vec![3]);
}

#[test]
fn paulista_renders_complete_fragment() {
    let media = ArticleMedia::new(uploads(&PAULISTA_PHOTOS), vec![]);
    let options = RenderOptions::new("https://example.com/uploads/2025/10/");

    let html = render_html(&paulista(&media).document, &options);

    assert!(html.starts_with("<!-- blog-formatter"));
    assert!(html.contains("<h1>Paulista! Everything ends in pizza</h1>"));
    assert!(html.contains(
        "<blockquote class=\"custom\" id=\"paragraph-3\">Linear time is an invention of the West: time is not linear, it is a marvelous overlapping.</blockquote>"
    ));
    assert!(html.contains(
        "<p id=\"paragraph-5\"><strong>And then, in the end, we are all paulistas!</strong></p>"
    ));
    assert!(html.contains(
        "<img src=\"https://example.com/uploads/2025/10/masp-4.jpg\" loading=\"lazy\" alt=\"masp 4\">"
    ));
    assert_eq!(html.matches("<div class=\"photo-row-double\">").count(), 3);
    assert!(!html.contains("end-gallery"));
}

#[test]
fn long_odd_set_with_videos() {
    let raw = format!(
        "Title\nSubtitle\n{}",
        (1..=7)
            .map(|i| format!("Paragraph {i}."))
            .collect::<Vec<_>>()
            .join("\n")
    );
    let names: Vec<String> = (1..=11).map(|i| format!("p{i}.jpg")).collect();
    let photos = names.iter().map(PhotoAsset::upload).collect();
    let videos = vec![
        VideoAsset::from_url("https://youtu.be/dQw4w9WgXcQ"),
        VideoAsset::from_url("https://vimeo.com/76979871"),
    ];

    let article = format_article(&raw, &ArticleMedia::new(photos, videos), "").unwrap();

    insta::assert_snapshot!(summarize(&article.plan), @r"
    Single@1 p1.jpg
    Single@3 p2.jpg
    Single@5 p3.jpg
    Single@7 p4.jpg
    Single@2 p5.jpg
    Double@4 p6.jpg, p7.jpg
    Double@6 p8.jpg
    Triple@7 p9.jpg, p10.jpg, p11.jpg
    Video@3 https://www.youtube.com/embed/dQw4w9WgXcQ
    Video@5 https://player.vimeo.com/video/76979871
    ");
}

#[test]
fn pasted_links_and_overrides_flow_through() {
    let links = parse_photo_links(
        "https://cdn.example.com/2025/10/masp-4.jpg\nnot a url\n\nhttps://cdn.example.com/2025/10/bardi%205.jpg",
    );
    let photos = links
        .iter()
        .map(|link| PhotoAsset::link(link.filename.as_str()))
        .collect();
    let overrides = ManualPlacements::new().pin_photo("bardi 5.jpg", 4);
    let media = ArticleMedia::new(photos, vec![]).with_overrides(overrides);

    let article = paulista(&media);

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].path, "https://cdn.example.com/2025/10/");
    let manual: Vec<_> = article
        .plan
        .units
        .iter()
        .map(|u| (u.kind, u.anchor, u.photo_assets().next().unwrap().name.clone()))
        .collect();
    assert_eq!(
        manual,
        vec![
            (UnitKind::Single, 4, "bardi 5.jpg".to_string()),
            (UnitKind::Single, 1, "masp-4.jpg".to_string()),
        ]
    );
}

#[test]
fn plan_serializes_to_json() {
    let media = ArticleMedia::new(
        uploads(&["a.jpg"]),
        vec![VideoAsset::from_url("https://example.com/clip.mp4")],
    );

    let article = paulista(&media);
    let json = serde_json::to_value(&article.plan).unwrap();

    assert_eq!(json["units"][0]["kind"], "single");
    assert_eq!(json["units"][0]["anchor"], 1);
    assert_eq!(json["units"][0]["assets"][0]["type"], "photo");
    assert_eq!(json["units"][0]["assets"][0]["name"], "a.jpg");
    assert_eq!(json["units"][1]["kind"], "video");
    assert_eq!(json["units"][1]["assets"][0]["kind"], "direct-file");
    assert!(json["units"][0]["assets"][0].get("id").is_none());
}
