#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::*;
    use web_time::{Duration, Instant};

    fn spec(config: BorderConfig) -> BorderSpec {
        config.resolve(Features::default()).unwrap()
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::try_from_hex("#12345"), None);
        assert_eq!(Color::try_from_hex("#GG0000"), None);
        assert_eq!(Color::from_hex("garbage"), Color::BLACK);
    }

    #[test]
    fn test_tint_filter_keeps_alpha() {
        let tint = ColorFilter::tint(Color(0, 0, 0, 128));
        let out = tint.apply(Color(200, 100, 50, 77));
        assert_eq!(out.3, 77);
        assert_eq!(out.0, 100);

        let opaque = ColorFilter::tint(Color(10, 20, 30, 255));
        assert_eq!(opaque.apply(Color(200, 100, 50, 255)), Color(10, 20, 30, 255));
    }

    #[test]
    fn test_grayscale_filter() {
        let g = ColorFilter::grayscale().apply(Color(255, 255, 255, 200));
        assert_eq!(g, Color(255, 255, 255, 200));
        let g = ColorFilter::grayscale().apply(Color(255, 0, 0, 255));
        assert_eq!(g.0, g.1);
        assert_eq!(g.1, g.2);
    }

    #[test]
    fn test_state_filter_selection() {
        let appearance = Appearance {
            color_filter: Some(ColorFilter::grayscale()),
            tints: StateTints {
                pressed: Some(Color(0, 0, 0, 64)),
                selected: None,
                disabled: None,
            },
            ..Appearance::default()
        };
        let f = Features::default();
        assert_eq!(
            appearance.filter_for(VisualState::Pressed, f),
            Some(ColorFilter::tint(Color(0, 0, 0, 64)))
        );
        assert_eq!(
            appearance.filter_for(VisualState::Selected, f),
            Some(ColorFilter::grayscale())
        );
        assert_eq!(
            appearance.filter_for(VisualState::Pressed, Features::empty()),
            Some(ColorFilter::grayscale())
        );
    }

    #[test]
    fn test_scale_type_validation() {
        assert_eq!(ScaleType::CenterCrop.validate(), Ok(ScaleType::CenterCrop));
        assert_eq!(
            ScaleType::FitXy.validate(),
            Err(ConfigError::UnsupportedScaleType(ScaleType::FitXy))
        );
    }

    #[test]
    fn test_geometry_feeds_transform() {
        let border = spec(BorderConfig::fixed(0, Color::WHITE));
        let g = compute_geometry(Size::new(100.0, 100.0), PaddingValues::ZERO, &border).unwrap();
        let t = compute_transform(400, 200, g.drawable_rect).unwrap();
        assert_eq!(t.scale, 0.5);
        assert_eq!(t.dx, -50.0);
        assert_eq!(t.dy, 0.0);
    }

    #[test]
    fn test_hit_test_uses_border_circle() {
        let border = spec(BorderConfig::fixed(10, Color::WHITE));
        let g = compute_geometry(Size::new(100.0, 100.0), PaddingValues::ZERO, &border).unwrap();
        // border_radius = 45
        assert!(g.hit_test(Vec2::new(95.0, 50.0)));
        assert!(!g.hit_test(Vec2::new(96.0, 50.0)));
    }

    #[test]
    fn test_error_conversions() {
        let e: Error = ConfigError::MissingBorderWidth.into();
        assert!(matches!(e, Error::Config(_)));
        assert_eq!(
            e.to_string(),
            "border_width or border_width_in_percentage have not been set at all"
        );
        let e: Error = DegenerateGeometry {
            width: 0.0,
            height: 3.0,
        }
        .into();
        assert!(matches!(e, Error::Geometry(_)));
    }

    #[test]
    fn test_spring_scale() {
        assert_eq!(spring_scale(0.0), 1.0);
        assert_eq!(spring_scale(PRESSED_SPRING_VALUE), 0.5);
    }

    #[test]
    fn test_press_animation_deterministic() {
        let t0 = Instant::now();
        set_clock(Box::new(TestClock { t: t0 }));

        let mut a = PressAnimation::new(AnimationSpec::tween(
            Duration::from_millis(1000),
            Easing::Linear,
        ));
        a.press();
        set_clock(Box::new(TestClock {
            t: t0 + Duration::from_millis(250),
        }));
        assert!(a.tick());
        assert!((a.value() - 0.25).abs() < 0.01);
        assert!((a.scale() - 0.875).abs() < 0.01);

        set_clock(Box::new(TestClock {
            t: t0 + Duration::from_millis(1000),
        }));
        assert!(!a.tick());
        assert_eq!(a.value(), 1.0);
        assert_eq!(a.scale(), 0.5);
    }

    #[test]
    fn test_press_spring_settles() {
        let t0 = Instant::now();
        set_clock(Box::new(TestClock { t: t0 }));
        let mut a = PressAnimation::default();
        a.press();
        a.release();
        set_clock(Box::new(TestClock {
            t: t0 + Duration::from_secs(1),
        }));
        assert!(!a.tick());
        assert_eq!(a.value(), 0.0);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_press_spring_converges_before_end() {
        let t0 = Instant::now();
        set_clock(Box::new(TestClock { t: t0 }));
        let spec = AnimationSpec::press_spring();
        let mut a = PressAnimation::new(spec);
        a.press();

        // underdamped: overshoots early
        set_clock(Box::new(TestClock {
            t: t0 + Duration::from_millis(119),
        }));
        assert!(a.tick());
        assert!(a.value() > 1.2);

        set_clock(Box::new(TestClock {
            t: t0 + spec.duration - Duration::from_millis(16),
        }));
        assert!(a.tick());
        let last_frame = a.value();

        set_clock(Box::new(TestClock {
            t: t0 + spec.duration,
        }));
        assert!(!a.tick());
        assert_eq!(a.value(), 1.0);
        assert!((a.value() - last_frame).abs() < 0.01);
    }

    #[test]
    fn test_spring_easing_endpoints() {
        let spring = Easing::Spring {
            damping: 20.0,
            stiffness: 800.0,
        };
        let d = Duration::from_millis(600);
        assert_eq!(spring.interpolate(0.0, d), 0.0);
        assert!((spring.interpolate(1.0, d) - 1.0).abs() < 0.005);

        let critical = Easing::Spring {
            damping: 40.0,
            stiffness: 400.0,
        };
        assert!((critical.interpolate(1.0, d) - 1.0).abs() < 0.005);
    }

    #[test]
    fn test_press_animation_to_arbitrary_target() {
        let t0 = Instant::now();
        set_clock(Box::new(TestClock { t: t0 }));
        let mut a = PressAnimation::default();
        a.animate_to(0.3);
        set_clock(Box::new(TestClock {
            t: t0 + Duration::from_secs(5),
        }));
        assert!(!a.tick());
        assert_eq!(a.value(), 0.3);
        assert!((a.scale() - 0.85).abs() < 1e-6);
    }
}
