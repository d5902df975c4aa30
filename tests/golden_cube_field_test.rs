#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_draw_green_merged_cubes_on_black() {
    use cubefield::{
        config::DemoConfig, context::InitContext, cube_field::CubeField, representation::Mode,
    };

    use crate::common::{seeded_rng, test_utils::Probe};

    golden_image_test!(|init: InitContext| {
        Probe::new(
            CubeField::with_rng(DemoConfig::mesh_switch(), &init, seeded_rng()),
            |ctx, state, texture| {
                assert_eq!(state.mode, Some(Mode::Merged));
                assert_eq!(state.objects, 1);

                let (width, height) = (ctx.config.width, ctx.config.height);
                let black = image::Rgba([0, 0, 0, 255]);
                let mut lit = 0;
                for (x, y, pixel) in texture.enumerate_pixels() {
                    if x >= width || y >= height || *pixel == black {
                        continue;
                    }
                    // Only the green channel of the cube colour survives shading
                    assert_eq!(pixel[0], 0, "red at ({}, {})", x, y);
                    assert_eq!(pixel[2], 0, "blue at ({}, {})", x, y);
                    lit += 1;
                }
                assert!(lit > 0, "no cube was drawn");
                Ok(cubefield::flow::ImageTestResult::Passed)
            },
        )
    });
}
