//! DOT-language quick reference panel. Static content.

use eframe::egui;

const REFERENCE: &[(&str, &str)] = &[
    (
        "Graphs",
        "graph Name { ... }      undirected\ndigraph Name { ... }    directed\nstrict graph { ... }    no duplicate edges",
    ),
    (
        "Nodes and edges",
        "a;                      declare a node\na -- b;                 undirected edge\na -> b -> c;            directed chain",
    ),
    (
        "Attributes",
        "a [label=\"Start\", shape=box];\na -> b [color=blue, style=dashed];\nnode [fontname=\"monospace\"];    defaults",
    ),
    (
        "Subgraphs",
        "subgraph cluster_0 {\n  label=\"group\";\n  a -> b;\n}",
    ),
    (
        "Comments",
        "// to end of line\n# to end of line\n/* block */",
    ),
];

pub fn render_dot_guide_panel(ui: &mut egui::Ui) {
    egui::ScrollArea::vertical()
        .id_salt("dot_guide_scroll")
        .show(ui, |ui| {
            ui.heading("DOT quick reference");
            for (topic, snippet) in REFERENCE {
                ui.add_space(6.0);
                ui.strong(*topic);
                ui.code(*snippet);
            }
        });
}
