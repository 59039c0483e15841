use insta::assert_snapshot;
use proptest::prelude::*;
use trellis_render::{
    box_style, line_width, render_to_string, Column, ConsoleOptions, Justify, OutputMode, Panel,
    Renderable, Style, Table, Text,
};

fn plain(width: usize) -> ConsoleOptions {
    ConsoleOptions::default().width(width).mode(OutputMode::Text)
}

fn fruit_table() -> Table {
    let mut table = Table::new();
    table.add_column(Column::new("Name"));
    table.add_column(Column::new("Qty").justify(Justify::Right));
    table.add_row(["apples", "3"]);
    table.add_row(["kiwis", "12"]);
    table
}

#[test]
fn snapshot_default_table() {
    let out = render_to_string(&fruit_table().into(), &plain(60));
    assert_snapshot!(out, @r"
    ┏━━━━━━━━┳━━━━━┓
    ┃ Name   ┃ Qty ┃
    ┡━━━━━━━━╇━━━━━┩
    │ apples │   3 │
    │ kiwis  │  12 │
    └────────┴─────┘
    ");
}

#[test]
fn snapshot_panel_wraps_content() {
    let panel = Panel::new("the quick brown fox jumps").title("Note");
    let out = render_to_string(&panel.into(), &plain(20));
    assert_snapshot!(out, @r"
    ╭────── Note ──────╮
    │ the quick brown  │
    │ fox jumps        │
    ╰──────────────────╯
    ");
}

#[test]
fn snapshot_grid_of_panels() {
    let mut grid = Table::grid();
    grid.add_row([
        Renderable::from(Panel::new("left").expand(false).box_style(box_style::ASCII)),
        Renderable::from(Panel::new("right").expand(false).box_style(box_style::ASCII)),
    ]);
    let out = render_to_string(&grid.into(), &plain(40));
    assert_snapshot!(out, @r"
    +------++-------+
    | left || right |
    +------++-------+
    ");
}

#[test]
fn test_term_output_styles_header() {
    let options = ConsoleOptions::default().width(60).mode(OutputMode::Term);
    let out = render_to_string(&fruit_table().into(), &options);
    assert!(out.contains("\x1b[1m"), "{:?}", out);
}

#[test]
fn test_nested_text_keeps_styles_through_table() {
    let mut table = Table::grid();
    let cell = Text::assemble([("a", Style::new().bold(true)), ("b", Style::new())]);
    table.add_row([cell]);
    let lines = Renderable::from(table).render_lines(&plain(10));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0][0].style.bold, Some(true));
}

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,12}", 1..20).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn wrapped_lines_fit_width(text in words(), width in 1usize..40) {
        let lines = Text::plain(text).render_lines(width, 8);
        for line in &lines {
            prop_assert!(line_width(line) <= width);
        }
    }

    #[test]
    fn wrapping_keeps_every_character(text in words(), width in 1usize..40) {
        let lines = Text::plain(text.clone()).render_lines(width, 8);
        let rendered: String = lines
            .iter()
            .flat_map(|line| line.iter().map(|s| s.text.clone()))
            .collect::<String>()
            .replace(' ', "");
        prop_assert_eq!(rendered, text.replace(' ', ""));
    }

    #[test]
    fn table_lines_fit_console(cells in prop::collection::vec(words(), 1..4), width in 10usize..80) {
        let mut table = Table::new();
        table.add_row(cells);
        let options = plain(width);
        for line in Renderable::from(table).render_lines(&options) {
            prop_assert!(line_width(&line) <= width);
        }
    }
}
