use std::io;

use anyhow::Result;

use apigw_trigger::config::LoadedConfig;
use apigw_trigger::presentation::output;

pub fn cmd_config(loaded: &LoadedConfig, json: bool) -> Result<()> {
    let source = loaded.source.as_deref();
    if json {
        output::emit(output::config_event(&loaded.config, source))?;
    } else {
        output::render_config(&mut io::stdout().lock(), &loaded.config, source)?;
    }
    Ok(())
}
