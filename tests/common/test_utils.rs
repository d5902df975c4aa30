use cubefield::{
    context::Context,
    control::ControlEvent,
    demo::DemoState,
    flow::{GraphicsFlow, ImageTestResult, Out},
    render::Render,
};
use instant::Duration;
use winit::event::WindowEvent;

pub(crate) type Texture = image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>;
pub(crate) type Validate = fn(&Context, &DemoState, &mut Texture) -> anyhow::Result<ImageTestResult>;

/// Flow that draws nothing and only configures the context.
pub(crate) struct Blank {
    pub(crate) setup: fn(&mut Context),
}

impl GraphicsFlow<DemoState, ControlEvent> for Blank {
    fn on_init(&mut self, ctx: &mut Context, _: &mut DemoState) -> Out<DemoState, ControlEvent> {
        (self.setup)(ctx);
        Out::Empty
    }

    fn on_update(&mut self, _: &Context, _: &mut DemoState, _: Duration) -> Out<DemoState, ControlEvent> {
        Out::Empty
    }

    fn on_tick(&mut self, _: &Context, _: &mut DemoState) -> Out<DemoState, ControlEvent> {
        Out::Empty
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        _: &mut DemoState,
        _: &WindowEvent,
    ) -> Out<DemoState, ControlEvent> {
        Out::Empty
    }

    fn on_custom_events(&mut self, _: &Context, _: &mut DemoState, event: ControlEvent) -> Option<ControlEvent> {
        Some(event)
    }

    fn on_render(&self) -> Render<'_> {
        Render::None
    }

    fn render_to_texture(
        &self,
        _: &Context,
        _: &mut DemoState,
        _: &mut Texture,
    ) -> Result<ImageTestResult, anyhow::Error> {
        Ok(ImageTestResult::Passed)
    }
}

/// Wraps a flow and validates the rendered image once a frame has been drawn.
pub(crate) struct Probe<F> {
    pub(crate) inner: F,
    pub(crate) frames: u32,
    pub(crate) validate: Validate,
}

impl<F> Probe<F> {
    pub(crate) fn new(inner: F, validate: Validate) -> Self {
        Self {
            inner,
            frames: 0,
            validate,
        }
    }
}

impl<F: GraphicsFlow<DemoState, ControlEvent>> GraphicsFlow<DemoState, ControlEvent> for Probe<F> {
    fn on_init(&mut self, ctx: &mut Context, state: &mut DemoState) -> Out<DemoState, ControlEvent> {
        self.inner.on_init(ctx, state)
    }

    fn on_update(&mut self, ctx: &Context, state: &mut DemoState, dt: Duration) -> Out<DemoState, ControlEvent> {
        self.frames += 1;
        self.inner.on_update(ctx, state, dt)
    }

    fn on_tick(&mut self, ctx: &Context, state: &mut DemoState) -> Out<DemoState, ControlEvent> {
        self.inner.on_tick(ctx, state)
    }

    fn on_window_events(
        &mut self,
        ctx: &Context,
        state: &mut DemoState,
        event: &WindowEvent,
    ) -> Out<DemoState, ControlEvent> {
        self.inner.on_window_events(ctx, state, event)
    }

    fn on_custom_events(&mut self, ctx: &Context, state: &mut DemoState, event: ControlEvent) -> Option<ControlEvent> {
        self.inner.on_custom_events(ctx, state, event)
    }

    fn on_render(&self) -> Render<'_> {
        self.inner.on_render()
    }

    fn render_to_texture(
        &self,
        ctx: &Context,
        state: &mut DemoState,
        texture: &mut Texture,
    ) -> Result<ImageTestResult, anyhow::Error> {
        if self.frames == 0 {
            return Ok(ImageTestResult::Waiting);
        }
        (self.validate)(ctx, state, texture)
    }
}

#[macro_export]
macro_rules! golden_image_test {
    ($graphics_elem:expr) => {{
        use cubefield::control::ControlEvent;
        use cubefield::demo::DemoState;
        use cubefield::flow::{FlowConstructor, GraphicsFlow};
        let model_constructor: FlowConstructor<DemoState, ControlEvent> = Box::new(|init| {
            Box::pin(async move {
                let g_flow: Box<dyn GraphicsFlow<DemoState, ControlEvent>> =
                    Box::new(($graphics_elem)(init));
                g_flow
            })
        });

        cubefield::flow::run("golden image test", vec![model_constructor])
            .expect("Failed to run flow for integration test.");
    }};
}
