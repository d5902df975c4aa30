#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_draw_every_individual_cube_in_flat_green() {
    use cubefield::{
        config::DemoConfig, context::InitContext, cube_field::CubeField, representation::Mode,
    };

    use crate::common::{seeded_rng, test_utils::Probe};

    golden_image_test!(|init: InitContext| {
        let config = DemoConfig {
            mode: Mode::Individual,
            ..DemoConfig::mesh_switch()
        };
        Probe::new(
            CubeField::with_rng(config, &init, seeded_rng()),
            |ctx, state, texture| {
                assert_eq!(state.mode, Some(Mode::Individual));
                assert_eq!(state.count, 10_000);
                assert_eq!(state.objects, 10_000);

                let (width, height) = (ctx.config.width, ctx.config.height);
                let black = image::Rgba([0, 0, 0, 255]);
                let green = image::Rgba([0, 255, 0, 255]);
                let mut lit = 0;
                for (x, y, pixel) in texture.enumerate_pixels() {
                    if x >= width || y >= height || *pixel == black {
                        continue;
                    }
                    assert_eq!(*pixel, green, "shaded pixel at ({}, {})", x, y);
                    lit += 1;
                }
                assert!(lit > 0, "no cube was drawn");
                Ok(cubefield::flow::ImageTestResult::Passed)
            },
        )
    });
}
