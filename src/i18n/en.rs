//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Pladur Budget Calculator (Ceiling)".into());
    t.insert("division.default_name".into(), "Division {n}".into());
    t.insert("report.divisions".into(), "Divisions".into());

    // Division table columns (also the exported headers)
    t.insert("column.name".into(), "Name".into());
    t.insert("column.width".into(), "Width (m)".into());
    t.insert("column.length".into(), "Length (m)".into());
    t.insert("column.area".into(), "Area (m\u{00B2})".into());
    t.insert("column.boards".into(), "Boards (un)".into());
    t.insert("column.track".into(), "Track (m)".into());
    t.insert("column.profiles".into(), "Profiles {length}m (un)".into());
    t.insert("column.rods".into(), "Rods (un)".into());
    t.insert("column.pivots".into(), "Pivots (un)".into());
    t.insert("column.material_cost".into(), "Materials cost ({currency})".into());

    // Totals
    t.insert("totals.title".into(), "Totals".into());
    t.insert("totals.area".into(), "Total area (m\u{00B2})".into());
    t.insert("totals.boards".into(), "Boards (un)".into());
    t.insert("totals.track".into(), "Track (m)".into());
    t.insert("totals.profiles".into(), "Profiles (un)".into());
    t.insert("totals.rods".into(), "Rods (un)".into());
    t.insert("totals.pivots".into(), "Pivots (un)".into());
    t.insert("totals.materials".into(), "Materials".into());
    t.insert("totals.labor".into(), "Labor".into());
    t.insert("totals.subtotal".into(), "Subtotal".into());
    t.insert("totals.margin".into(), "Margin".into());
    t.insert("totals.final_price".into(), "Final client price".into());

    // Parameters
    t.insert("params.title".into(), "Parameters".into());
    t.insert("param.board".into(), "Board (per unit)".into());
    t.insert("param.track".into(), "Perimeter track (per meter)".into());
    t.insert("param.profile".into(), "Profile (per unit)".into());
    t.insert("param.rod".into(), "Threaded rod (per unit)".into());
    t.insert("param.pivot".into(), "Pivot/suspension (per unit)".into());
    t.insert("param.labor".into(), "Labor (per m\u{00B2})".into());
    t.insert("param.margin".into(), "Profit margin (%)".into());
    t.insert("param.profile-spacing".into(), "Profile spacing (m)".into());
    t.insert("param.rod-spacing".into(), "Rod spacing (m)".into());
    t.insert("param.board-width".into(), "Board width (m)".into());
    t.insert("param.board-length".into(), "Board length (m)".into());
    t.insert("param.profile-length".into(), "Profile unit length (m)".into());
    t.insert("param.language".into(), "Language".into());
    t.insert("param.currency".into(), "Currency".into());
    t.insert("param.currency-symbol".into(), "Currency symbol".into());
    t.insert("param.file-name".into(), "Export file name".into());
    t.insert("param.delimiter".into(), "Export delimiter".into());

    // Interactive session
    t.insert("shell.welcome".into(), "Type 'help' for commands, 'quit' to leave.".into());
    t.insert("shell.prompt".into(), "pladur> ".into());
    t.insert("shell.added".into(), "Added: {name} ({width} m \u{00D7} {length} m)".into());
    t.insert("shell.removed".into(), "Removed: {name}".into());
    t.insert("shell.cleared".into(), "All divisions removed".into());
    t.insert("shell.empty".into(), "No divisions yet. Use 'add <width> <length> [name]'.".into());
    t.insert("shell.exported".into(), "Exported {count} divisions to {path}".into());
    t.insert("shell.param_set".into(), "{key} = {value}".into());
    t.insert("shell.error".into(), "Error: {message}".into());
    t.insert("shell.goodbye".into(), "Bye.".into());
    t.insert(
        "shell.help".into(),
        "Commands:\n\
         \x20 add <width> <length> [name]  add a division\n\
         \x20 list                         show the divisions\n\
         \x20 totals                       show divisions and totals\n\
         \x20 remove <n>                   remove division number n\n\
         \x20 clear                        remove all divisions\n\
         \x20 set <key> <value>            change a parameter\n\
         \x20 params                       show the parameters\n\
         \x20 export [path]                export divisions as CSV\n\
         \x20 json [path]                  print or save the JSON report\n\
         \x20 help                         show this help\n\
         \x20 quit                         leave"
            .into(),
    );

    t
}
