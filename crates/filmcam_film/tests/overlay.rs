use filmcam_core::{Color, Point};
use filmcam_film::{
    compose_overlay, CameraStyle, FilmOverlay, LayerKind, OverlayLayer, ViewfinderVariant,
    DEFAULT_DENSITY,
};
use pretty_assertions::assert_eq;

fn kinds(layers: &[OverlayLayer]) -> Vec<LayerKind> {
    layers.iter().map(OverlayLayer::kind).collect()
}

#[test]
fn movie_stack() {
    let layers = compose_overlay(CameraStyle::Movie, true, 0.3, false);
    assert_eq!(
        kinds(&layers),
        vec![
            LayerKind::Wash,
            LayerKind::GradientTop,
            LayerKind::GradientBottom,
            LayerKind::Grain,
            LayerKind::Vignette,
            LayerKind::Viewfinder,
        ]
    );
    match &layers[3] {
        OverlayLayer::Grain { spec } => {
            assert_eq!(spec.intensity, 0.15);
            assert_eq!(spec.density, DEFAULT_DENSITY);
        }
        other => panic!("expected grain, got {other:?}"),
    }
    match &layers[4] {
        OverlayLayer::Vignette { vignette } => assert_eq!(vignette.strength, 0.35),
        other => panic!("expected vignette, got {other:?}"),
    }
    match &layers[5] {
        OverlayLayer::Viewfinder { viewfinder } => {
            assert_eq!(viewfinder.variant, ViewfinderVariant::MovieBars)
        }
        other => panic!("expected viewfinder, got {other:?}"),
    }
}

#[test]
fn grain_toggle_drops_only_grain() {
    let on = compose_overlay(CameraStyle::Leica, true, 0.3, false);
    let off = compose_overlay(CameraStyle::Leica, false, 0.3, false);
    assert_eq!(on.len(), off.len() + 1);
    assert!(!kinds(&off).contains(&LayerKind::Grain));
}

#[test]
fn normal_has_no_grain_or_viewfinder() {
    let layers = compose_overlay(CameraStyle::Normal, true, 0.3, true);
    assert_eq!(
        kinds(&layers),
        vec![
            LayerKind::Wash,
            LayerKind::GradientTop,
            LayerKind::GradientBottom,
            LayerKind::Vignette,
        ]
    );
    assert_eq!(
        layers[0],
        OverlayLayer::Wash {
            color: Color::TRANSPARENT
        }
    );
}

#[test]
fn polaroid_has_no_viewfinder_and_uses_base_intensity() {
    let layers = compose_overlay(CameraStyle::Polaroid, true, 0.45, true);
    assert!(!kinds(&layers).contains(&LayerKind::Viewfinder));
    let strength = layers.iter().find_map(|l| match l {
        OverlayLayer::Vignette { vignette } => Some(vignette.strength),
        _ => None,
    });
    assert_eq!(strength, Some(0.45));
}

#[test]
fn gradient_geometry() {
    let layers = compose_overlay(CameraStyle::Fuji, true, 0.3, false);
    let OverlayLayer::GradientTop { gradient: top } = &layers[1] else {
        panic!("expected top gradient");
    };
    assert_eq!((top.start, top.end), (Point::new(0.0, 0.0), Point::new(0.9, 0.9)));
    assert_eq!(top.first_color().map(|c| c.to_css()).as_deref(), Some("rgba(255,240,200,0.15)"));
    assert_eq!(top.last_color(), Some(Color::TRANSPARENT));

    let OverlayLayer::GradientBottom { gradient: bottom } = &layers[2] else {
        panic!("expected bottom gradient");
    };
    assert_eq!((bottom.start, bottom.end), (Point::new(0.2, 0.0), Point::new(1.0, 1.0)));
    assert_eq!(bottom.first_color(), Some(Color::TRANSPARENT));
    assert_eq!(bottom.last_color().map(|c| c.to_css()).as_deref(), Some("rgba(0,40,20,0.25)"));
}

#[test]
fn decorated_styles_get_their_viewfinder() {
    for (style, variant) in [
        (CameraStyle::Leica, ViewfinderVariant::LeicaBrackets),
        (CameraStyle::Hasselblad, ViewfinderVariant::HasselbladMask),
        (CameraStyle::Movie, ViewfinderVariant::MovieBars),
        (CameraStyle::Fuji, ViewfinderVariant::FujiInfo),
    ] {
        let layers = compose_overlay(style, false, 0.3, false);
        let Some(OverlayLayer::Viewfinder { viewfinder }) = layers.last() else {
            panic!("{style}: viewfinder should be the top layer");
        };
        assert_eq!(viewfinder.variant, variant);
    }
}

#[test]
fn rendered_overlay_materializes_grain() {
    let mut overlay = FilmOverlay::seeded(5);
    let out = overlay.render(CameraStyle::Hasselblad, true, 0.3, false);
    let grain = out.grain.as_ref().expect("grain layer");
    assert_eq!(grain.dots.len(), DEFAULT_DENSITY);
    assert_eq!(grain.intensity, 0.05);
    assert_eq!(out.kinds().len(), 6);

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["style"], "hasselblad");
    assert_eq!(json["layers"][0]["kind"], "wash");
}
