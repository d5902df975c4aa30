#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_render_clear_colour() {
    use cubefield::context::{Context, InitContext};
    use wgpu::Color;

    use crate::common::test_utils::{Blank, Probe};

    golden_image_test!(|_: InitContext| {
        Probe::new(
            Blank {
                setup: |ctx: &mut Context| ctx.clear_colour = Color::WHITE,
            },
            |_, _, texture| {
                let desired_pixel = image::Rgba([255, 255, 255, 255]);
                for pixel in texture.pixels() {
                    assert_eq!(*pixel, desired_pixel);
                }
                Ok(cubefield::flow::ImageTestResult::Passed)
            },
        )
    });
}
