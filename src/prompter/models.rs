use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
}

/// One interactive exchange: draw, then react to a line of input.
pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}
