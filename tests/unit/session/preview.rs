use super::*;
use crate::style::resolver::BackgroundMode;
use crate::symbol::encoder::EcLevel;

#[test]
fn empty_text_prompts_without_an_image() {
    let p = generate("", &StyleSelections::default(), Uploads::default());
    assert!(matches!(p, Preview::Prompt(QrStyleError::InvalidInput(_))));
    assert!(p.rendered().is_none());
    assert_eq!(p.messages().len(), 1);
}

#[test]
fn bad_selection_is_rejected_not_raised() {
    let sel = StyleSelections {
        primary_color: "#nothex".into(),
        ..StyleSelections::default()
    };
    let p = generate("hello", &sel, Uploads::default());
    assert!(matches!(p, Preview::Rejected(QrStyleError::Validation(_))));
}

#[test]
fn oversized_text_is_rejected() {
    let text = "z".repeat(5000);
    let p = generate(&text, &StyleSelections::default(), Uploads::default());
    assert!(matches!(p, Preview::Rejected(QrStyleError::Encode(_))));
}

#[test]
fn ready_carries_png_of_the_preview() {
    let p = generate(
        "https://example.com",
        &StyleSelections::default(),
        Uploads::default(),
    );
    let r = p.rendered().unwrap();
    assert_eq!(r.image.dimensions(), (400, 400));
    assert_eq!(crate::export::png::decode_png(&r.png).unwrap(), r.image);
    assert!(r.warnings.is_empty());
    assert!(p.messages().is_empty());
}

#[test]
fn ready_carries_the_symbol_it_drew() {
    let sel = StyleSelections {
        ec_level: EcLevel::High,
        quiet_zone: 2,
        ..StyleSelections::default()
    };
    let p = generate("hello", &sel, Uploads::default());
    let r = p.rendered().unwrap();
    assert_eq!(r.matrix, encode("hello", EcLevel::High).unwrap());
    assert_eq!(r.quiet_zone, 2);
}

#[test]
fn broken_upload_still_renders_with_a_warning() {
    let sel = StyleSelections {
        background_mode: BackgroundMode::Image,
        ..StyleSelections::default()
    };
    let uploads = Uploads {
        background: Some(vec![1, 2, 3]),
        logo: Some(vec![4, 5, 6]),
    };
    let p = generate("fallbacks", &sel, uploads);
    let r = p.rendered().unwrap();
    assert_eq!(r.warnings.len(), 2);
    assert_eq!(p.messages().len(), 2);
    assert_eq!(r.image.get_pixel(0, 0).0, [255, 255, 255, 255]);
}
