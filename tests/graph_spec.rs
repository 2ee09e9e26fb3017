use launchmap::graph::{self, BuildError, ResolveError};
use launchmap::models::{LaunchAction, LaunchActionKind, LaunchFile};
use speculate2::speculate;

fn arg(id: &str, name: &str, deps: &[&str]) -> LaunchAction {
    LaunchAction {
        id: id.to_string(),
        name: name.to_string(),
        kind: LaunchActionKind::Arg,
        dependencies: deps.iter().map(|d| d.to_string()).collect(),
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

fn include(id: &str, name: &str, deps: &[&str], actions: Vec<LaunchAction>) -> LaunchAction {
    LaunchAction {
        id: id.to_string(),
        name: name.to_string(),
        kind: LaunchActionKind::Include { actions },
        dependencies: deps.iter().map(|d| d.to_string()).collect(),
    }
}

fn launch_file(actions: Vec<LaunchAction>) -> LaunchFile {
    LaunchFile {
        id: "001".to_string(),
        name: "robot.launch.py".to_string(),
        actions,
    }
}

/// Launch file with nested includes whose actions reference both
/// sibling-scope and including-scope ids.
fn sample_launch_file() -> LaunchFile {
    launch_file(vec![
        arg("a001", "use_sim_time", &[]),
        arg("a002", "simple_arg", &[]),
        node("a003", "/rviz2", &[]),
        include(
            "a004",
            "nav2_bringup/launch/bringup_launch.py",
            &["a001"],
            vec![
                arg("a005", "dependent_arg", &[]),
                node("a006", "/nav2_container", &["a005"]),
                include(
                    "a007",
                    "example/launch/included_launch.py",
                    &["a005", "a004"],
                    vec![
                        arg("a008", "dependent_arg", &[]),
                        node("a009", "/nav2_container", &["a008"]),
                    ],
                ),
            ],
        ),
    ])
}

speculate! {
    describe "build" {
        it "flattens nested includes into a single graph" {
            let graph = graph::build(&sample_launch_file()).expect("build failed");

            assert_eq!(graph.len(), 9);
            assert!(graph.contains("a001"));
            assert!(graph.contains("a009"));
        }

        it "records which include introduced each action" {
            let graph = graph::build(&sample_launch_file()).expect("build failed");

            assert_eq!(graph.get("a001").unwrap().included_by, None);
            assert_eq!(
                graph.get("a005").unwrap().included_by.as_deref(),
                Some("a004")
            );
            assert_eq!(
                graph.get("a008").unwrap().included_by.as_deref(),
                Some("a007")
            );
        }

        it "adds no dependency edges for nesting alone" {
            let graph = graph::build(&sample_launch_file()).expect("build failed");

            // a005 is nested under a004 but declares no dependency on it.
            assert!(graph.get("a005").unwrap().dependencies.is_empty());
            let nested_edges: Vec<_> = graph
                .edges()
                .filter(|(dependent, _)| dependent.as_str() == "a005")
                .collect();
            assert!(nested_edges.is_empty());
        }

        it "accepts dependencies on the including scope" {
            // a007 depends on its own includer a004 and on sibling a005.
            let graph = graph::build(&sample_launch_file()).expect("build failed");
            let deps = &graph.get("a007").unwrap().dependencies;
            assert_eq!(deps, &vec!["a005".to_string(), "a004".to_string()]);
        }

        it "rejects an id reused across an include boundary" {
            let file = launch_file(vec![
                arg("a1", "outer", &[]),
                include("a2", "inner.launch.py", &[], vec![arg("a1", "inner", &[])]),
            ]);

            let err = graph::build(&file).expect_err("duplicate id must fail");
            assert_eq!(err, BuildError::DuplicateId("a1".to_string()));
        }

        it "rejects a dependency on a missing action" {
            let file = launch_file(vec![arg("c1", "broken", &["missing"])]);

            let err = graph::build(&file).expect_err("dangling reference must fail");
            assert_eq!(
                err,
                BuildError::DanglingDependency {
                    action: "c1".to_string(),
                    missing: "missing".to_string(),
                }
            );
        }

        it "accepts a forward reference" {
            let file = launch_file(vec![
                node("n1", "/early", &["n2"]),
                node("n2", "/late", &[]),
            ]);

            assert!(graph::build(&file).is_ok());
        }
    }

    describe "topological_order" {
        it "orders an empty graph as an empty sequence" {
            let graph = graph::build(&launch_file(vec![])).expect("build failed");
            assert_eq!(graph::topological_order(&graph).unwrap(), Vec::<String>::new());
        }

        it "emits dependencies before their dependents" {
            let graph = graph::build(&sample_launch_file()).expect("build failed");
            let order = graph::topological_order(&graph).expect("order failed");

            assert_eq!(order.len(), graph.len());
            let position = |id: &str| order.iter().position(|o| o == id).unwrap();
            for (dependent, dependency) in graph.edges() {
                assert!(
                    position(dependency) < position(dependent),
                    "{} must come before {}",
                    dependency,
                    dependent
                );
            }
        }

        it "breaks ties by declaration order" {
            let file = launch_file(vec![
                arg("a1", "use_sim_time", &[]),
                node("a2", "/rviz2", &["a1"]),
                include(
                    "a3",
                    "bringup.launch.py",
                    &["a1"],
                    vec![arg("a4", "nested_arg", &[]), node("a5", "/nav2", &["a4"])],
                ),
            ]);
            let graph = graph::build(&file).expect("build failed");
            let order = graph::topological_order(&graph).expect("order failed");

            assert_eq!(order, vec!["a1", "a2", "a3", "a4", "a5"]);
        }

        it "reports a two-action cycle as a closed walk" {
            let file = launch_file(vec![
                node("b1", "/first", &["b2"]),
                node("b2", "/second", &["b1"]),
            ]);
            let graph = graph::build(&file).expect("build failed");

            let err = graph::topological_order(&graph).expect_err("cycle must fail");
            assert_eq!(
                err,
                ResolveError::Cycle(vec![
                    "b1".to_string(),
                    "b2".to_string(),
                    "b1".to_string(),
                ])
            );
        }

        it "reports the back-edge path of a longer cycle" {
            let file = launch_file(vec![
                node("x1", "/a", &["x3"]),
                node("x2", "/b", &["x1"]),
                node("x3", "/c", &["x2"]),
            ]);
            let graph = graph::build(&file).expect("build failed");

            let err = graph::topological_order(&graph).expect_err("cycle must fail");
            let ResolveError::Cycle(walk) = err else {
                panic!("expected a cycle");
            };

            // Closed walk: same action at both ends, and every consecutive
            // pair is a real dependency edge.
            assert_eq!(walk.first(), walk.last());
            assert_eq!(walk.len(), 4);
            for pair in walk.windows(2) {
                let deps = &graph.get(&pair[0]).unwrap().dependencies;
                assert!(deps.contains(&pair[1]));
            }
        }

        it "is deterministic across repeated runs" {
            let graph = graph::build(&sample_launch_file()).expect("build failed");
            let first = graph::topological_order(&graph).expect("order failed");
            let second = graph::topological_order(&graph).expect("order failed");
            assert_eq!(first, second);
        }
    }

    describe "dependents" {
        it "returns the transitive closure of dependents" {
            let graph = graph::build(&sample_launch_file()).expect("build failed");

            // a004 depends on a001 directly; a007 depends on a004.
            let result = graph::dependents(&graph, "a001").expect("query failed");
            let expected: Vec<&str> = vec!["a004", "a007"];
            assert_eq!(result.iter().map(String::as_str).collect::<Vec<_>>(), expected);
        }

        it "returns the empty set for a leaf" {
            let graph = graph::build(&sample_launch_file()).expect("build failed");
            let result = graph::dependents(&graph, "a009").expect("query failed");
            assert!(result.is_empty());
        }

        it "fails for an unknown action" {
            let graph = graph::build(&sample_launch_file()).expect("build failed");
            let err = graph::dependents(&graph, "nope").expect_err("must fail");
            assert_eq!(err, ResolveError::UnknownAction("nope".to_string()));
        }
    }

    describe "independent_subset" {
        it "lists dependency-free actions in declaration order" {
            let graph = graph::build(&sample_launch_file()).expect("build failed");
            assert_eq!(
                graph::independent_subset(&graph),
                vec!["a001", "a002", "a003", "a005", "a008"]
            );
        }

        it "is empty when everything depends on something" {
            let file = launch_file(vec![
                node("b1", "/first", &["b2"]),
                node("b2", "/second", &["b1"]),
            ]);
            let graph = graph::build(&file).expect("build failed");
            assert!(graph::independent_subset(&graph).is_empty());
        }
    }
}
