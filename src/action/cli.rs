use std::io;
use std::sync::Arc;
use crate::config::ports::ConfigPort;
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::RunOutcome;
use crate::service::collaborator::CollaboratorService;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::{setup_logging, ConsoleOutput};

/// 程式入口流程：固定輸入路徑，無命令列參數
pub fn process() -> io::Result<RunOutcome> {
    process_with(Box::new(DefaultConfigAdapter::new()))
}

pub fn process_with(config_port: Box<dyn ConfigPort>) -> io::Result<RunOutcome> {
    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;
    setup_logging(&config.log_level)?;
    log::info!("開始執行，輸入路徑：{}", config.input.display());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .thread_name("file-converter")
        .build()?;

    let collaborator = Arc::new(CollaboratorService::new(&config));
    let mut facade = ConversionFacade::new(
        config,
        collaborator,
        runtime.handle().clone(),
        ConsoleOutput::stdout(),
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let outcome = facade.run(&mut input)?;
    log::info!("程式執行完成：{:?}", outcome);
    Ok(outcome)
}
