use std::path::PathBuf;

use clap::Parser;
use habitat_engineering_toolbox::{app, config, i18n};

/// 회전 원통 거주구 설계 보고서를 계산해 출력한다.
#[derive(Debug, Parser)]
#[command(name = "habitat_toolbox", version)]
struct Cli {
    /// 설정 파일 경로. 생략하면 habitat.toml을 찾고 없으면 기준 설정을 만든다.
    #[arg(long)]
    config: Option<PathBuf>,

    /// 출력 언어 (ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 보고서를 한 번 출력한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        let lang = i18n::resolve_language(&cli.lang, None);
        let tr = i18n::Translator::new(&lang);
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_default(cli.config.as_deref())?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(&cfg, &tr)?;
    Ok(())
}
