use super::*;
use crate::renderer::ToneMapping;

#[test]
fn test_render_order() {
    let indices: Vec<usize> = ViewKind::ALL.iter().map(|k| k.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert!(ViewKind::Color < ViewKind::Line);
    assert!(ViewKind::Depth < ViewKind::Normal);
}

#[test]
fn test_names_round_trip() {
    for kind in ViewKind::ALL {
        assert_eq!(ViewKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ViewKind::from_name("NORMAL"), Some(ViewKind::Normal));
    assert_eq!(ViewKind::from_name("albedo"), None);
    assert_eq!(ViewKind::Line.to_string(), "line");
}

#[test]
fn test_default_overrides() {
    assert_eq!(ViewKind::Color.default_override(), None);
    assert_eq!(ViewKind::Line.default_override(), None);
    assert_eq!(ViewKind::Depth.default_override(), Some(MaterialOverride::Depth));
    assert_eq!(ViewKind::Normal.default_override(), Some(MaterialOverride::Normal));
}

#[test]
fn test_clear_colors() {
    assert_eq!(ViewKind::Color.clear_color(), [0.0, 0.0, 0.0, 1.0]);
    let normal = ViewKind::Normal.clear_color();
    assert!((normal[0] - 0.50196).abs() < 1e-4);
    assert_eq!(normal[2], 1.0);
}

#[test]
fn test_only_line_view_uses_pipeline() {
    for kind in ViewKind::ALL {
        assert_eq!(View::new(kind).uses_pipeline(), kind == ViewKind::Line);
        assert!(View::new(kind).target().is_none());
    }
}

#[test]
fn test_mask_kinds_in_render_order() {
    let mask = ViewMask::NORMAL | ViewMask::COLOR | ViewMask::LINE;
    let kinds: Vec<ViewKind> = mask.kinds().collect();
    assert_eq!(kinds, vec![ViewKind::Color, ViewKind::Line, ViewKind::Normal]);
    assert_eq!(ViewMask::all().kinds().count(), 4);
}

#[test]
fn test_only_color_view_is_tone_mapped_and_shadowed() {
    let color = View::new(ViewKind::Color).render_settings();
    assert_eq!(color.tone_mapping, ToneMapping::AcesFilmic);
    assert_eq!(color.exposure, 0.8);
    assert!(color.shadows);

    for kind in [ViewKind::Line, ViewKind::Depth, ViewKind::Normal] {
        let settings = View::new(kind).render_settings();
        assert_eq!(settings.tone_mapping, ToneMapping::None, "{}", kind);
        assert!(!settings.shadows, "{}", kind);
    }
}
