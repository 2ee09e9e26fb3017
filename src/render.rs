//! ASCII tree rendering for a launch file's nested action structure.

use crate::models::{LaunchAction, LaunchActionKind, LaunchFile};

const ARG: char = '◇';
const NODE: char = '●';
const INCLUDE: char = '▸';

/// Get the symbol for an action kind.
fn kind_symbol(kind: &LaunchActionKind) -> char {
    match kind {
        LaunchActionKind::Arg => ARG,
        LaunchActionKind::Node => NODE,
        LaunchActionKind::Include { .. } => INCLUDE,
    }
}

/// Render a launch file's action tree as ASCII art.
///
/// Example output:
/// ```text
/// robot.launch.py
/// ├── ◇ use_sim_time
/// ├── ● /rviz2
/// └── ▸ nav2_bringup/launch/bringup_launch.py (after a001)
///     ├── ◇ dependent_arg
///     └── ● /nav2_container (after a005)
/// ```
pub fn render_tree(file: &LaunchFile) -> String {
    let mut output = String::new();
    output.push_str(&file.name);
    output.push('\n');
    for (i, action) in file.actions.iter().enumerate() {
        let is_last = i == file.actions.len() - 1;
        render_action(&mut output, action, "", is_last);
    }
    output
}

/// Recursively render an action and, for includes, its nested list.
fn render_action(output: &mut String, action: &LaunchAction, prefix: &str, is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(branch);
    output.push(kind_symbol(&action.kind));
    output.push(' ');
    output.push_str(&action.name);
    if !action.dependencies.is_empty() {
        output.push_str(" (after ");
        output.push_str(&action.dependencies.join(", "));
        output.push(')');
    }
    output.push('\n');

    if let LaunchActionKind::Include { actions } = &action.kind {
        let continuation = if is_last { "    " } else { "│   " };
        let child_prefix = format!("{}{}", prefix, continuation);
        for (i, nested) in actions.iter().enumerate() {
            let nested_is_last = i == actions.len() - 1;
            render_action(output, nested, &child_prefix, nested_is_last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(id: &str, name: &str) -> LaunchAction {
        LaunchAction {
            id: id.to_string(),
            name: name.to_string(),
            kind: LaunchActionKind::Arg,
            dependencies: vec![],
        }
    }

    fn node(id: &str, name: &str, deps: &[&str]) -> LaunchAction {
        LaunchAction {
            id: id.to_string(),
            name: name.to_string(),
            kind: LaunchActionKind::Node,
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn file(name: &str, actions: Vec<LaunchAction>) -> LaunchFile {
        LaunchFile {
            id: "001".to_string(),
            name: name.to_string(),
            actions,
        }
    }

    #[test]
    fn test_empty_file() {
        let output = render_tree(&file("empty.launch.py", vec![]));
        assert_eq!(output, "empty.launch.py\n");
    }

    #[test]
    fn test_flat_actions() {
        let output = render_tree(&file(
            "robot.launch.py",
            vec![
                arg("a001", "use_sim_time"),
                node("a002", "/rviz2", &["a001"]),
            ],
        ));
        assert_eq!(
            output,
            "robot.launch.py\n├── ◇ use_sim_time\n└── ● /rviz2 (after a001)\n"
        );
    }

    #[test]
    fn test_nested_include() {
        let include = LaunchAction {
            id: "a003".to_string(),
            name: "bringup.launch.py".to_string(),
            kind: LaunchActionKind::Include {
                actions: vec![
                    arg("a004", "dependent_arg"),
                    node("a005", "/nav2_container", &["a004"]),
                ],
            },
            dependencies: vec!["a001".to_string()],
        };
        let output = render_tree(&file(
            "robot.launch.py",
            vec![arg("a001", "use_sim_time"), include],
        ));
        let expected = "robot.launch.py\n\
                        ├── ◇ use_sim_time\n\
                        └── ▸ bringup.launch.py (after a001)\n\
                        \u{20}   ├── ◇ dependent_arg\n\
                        \u{20}   └── ● /nav2_container (after a004)\n";
        assert_eq!(output, expected);
    }
}
