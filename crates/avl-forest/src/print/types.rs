/// Renders one child given the indentation its own children should use.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;
