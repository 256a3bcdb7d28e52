use std::fs::File;

use ngdom::ModuleRegistry;
use simplelog::{Config, LevelFilter, WriteLogger};
use ui_select::{Theme, UiSelect, UiSelectModule};

fn main() -> ui_select::Result<()> {
    // Set up file logging
    let log_file = File::create("render.log").map_err(ngdom::Error::from)?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut modules = ModuleRegistry::new();
    modules.register(UiSelectModule::new());

    let select = UiSelect::new(
        "name",
        "Select or search a person",
        "person in people | filter: $select.search",
        "person.name | highlight: $select.search",
    )
    .model("vm.person")
    .theme(Theme::Select2)
    .search_enabled(true)
    .allow_clear(true)
    .title("People");

    println!("<script>{}</script>", modules.render_script("app"));
    select.write_html(std::io::stdout())?;
    println!();
    Ok(())
}
