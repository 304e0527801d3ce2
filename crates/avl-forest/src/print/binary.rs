use super::types::PrintChild;

/// Binary tree-dump: left child on a `←` line, right child on a `→` line,
/// each rendered with two more spaces of indentation.
pub fn print_binary(
    tab: Option<&str>,
    left: Option<&PrintChild<'_>>,
    right: Option<&PrintChild<'_>>,
) -> String {
    let tab = tab.unwrap_or("");
    let child_tab = format!("{tab}  ");
    [("←", left), ("→", right)]
        .into_iter()
        .filter_map(|(arrow, child)| child.map(|f| format!("\n{tab}{arrow} {}", f(&child_tab))))
        .collect()
}
