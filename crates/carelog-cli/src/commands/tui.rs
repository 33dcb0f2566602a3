use anyhow::{anyhow, Context as _, Result};
use carelog_config as config;
use carelog_store::paths;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

pub fn launch(
    records_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let app_config = config::load(config_path).with_context(|| "load config")?;
    let records_path = match records_path.or(app_config.records_path) {
        Some(path) => path,
        None => paths::records_path().with_context(|| "resolve records path")?,
    };
    if verbose {
        eprintln!("records: {}", records_path.display());
    }
    let mut command = build_command(&records_path);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = command.exec();
        Err(exec_error(err))
    }

    #[cfg(not(unix))]
    {
        let status = command.status().with_context(|| "launch carelog-tui")?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn build_command(records_path: &Path) -> Command {
    let binary = find_tui_binary();
    let mut command = Command::new(binary);
    command.arg("--records-path").arg(records_path);
    command
}

fn find_tui_binary() -> PathBuf {
    let name = format!("carelog-tui{}", env::consts::EXE_SUFFIX);
    if let Ok(current) = env::current_exe() {
        if let Some(dir) = current.parent() {
            let candidate = dir.join(&name);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(name)
}

#[cfg(unix)]
fn exec_error(err: std::io::Error) -> anyhow::Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        return anyhow!(
            "carelog-tui binary not found; build it with `cargo build -p carelog-tui` or install the package"
        );
    }
    anyhow!("launch carelog-tui failed: {}", err)
}
