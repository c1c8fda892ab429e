use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::{error, info, warn};
use tokio::runtime::Handle;
use walkdir::WalkDir;
use crate::action::interactive::{Prompt, Selection, INVALID_CHOICE_MESSAGE};
use crate::config::config::{validate_input_path, InputKind};
use crate::config::ports::AppConfig;
use crate::facade::dispatcher::{DispatchOutcome, Dispatcher};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::RunOutcome;
use crate::models::format::detect_format;
use crate::service::traits::i_service::CollaboratorServiceTrait;
use crate::utils::utils::ConsoleOutput;

pub const MISSING_INPUT_MESSAGE: &str = "File does not exist at the given path.";
pub const EMPTY_DIRECTORY_MESSAGE: &str = "No files to convert in the folder.";
pub const INPUT_ERROR_LABEL: &str = "Error accessing the input";
pub const MULTIPLE_FILES_MESSAGE: &str = "Multiple files found in the folder. Converting all files...";

// 單一檔案處理後的流程控制
enum Step {
    Dispatched(DispatchOutcome),
    Halt,
}

#[derive(Default)]
struct Tally {
    dispatched: usize,
    unsupported: usize,
}

impl Tally {
    fn record(&mut self, outcome: DispatchOutcome) {
        match outcome {
            DispatchOutcome::Started(_) => self.dispatched += 1,
            DispatchOutcome::Unsupported => self.unsupported += 1,
        }
    }

    fn processed(&self) -> usize {
        self.dispatched + self.unsupported
    }

    fn completed(self) -> RunOutcome {
        RunOutcome::Completed {
            dispatched: self.dispatched,
            unsupported: self.unsupported,
        }
    }
}

/// 批次走訪：判斷輸入為檔案或目錄，逐一偵測、提示並分派
pub struct ConversionFacade {
    config: AppConfig,
    dispatcher: Dispatcher,
    console: ConsoleOutput,
}

impl ConversionFacade {
    pub fn new(
        config: AppConfig,
        collaborator: Arc<dyn CollaboratorServiceTrait>,
        runtime: Handle,
        console: ConsoleOutput,
    ) -> Self {
        let dispatcher = Dispatcher::new(collaborator, runtime, console.clone());
        ConversionFacade {
            config,
            dispatcher,
            console,
        }
    }

    fn walk(&mut self, prompt: &mut Prompt<&mut dyn BufRead>) -> io::Result<RunOutcome> {
        let input_path = self.config.input.clone();
        let kind = match validate_input_path(&input_path) {
            Ok(kind) => kind,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.console.println(MISSING_INPUT_MESSAGE)?;
                return Ok(RunOutcome::InputMissing);
            }
            Err(e) => return Err(e),
        };

        match kind {
            InputKind::File => self.process_single_file(prompt, &input_path),
            InputKind::Directory => self.process_directory(prompt, &input_path),
        }
    }

    fn process_single_file(
        &mut self,
        prompt: &mut Prompt<&mut dyn BufRead>,
        path: &Path,
    ) -> io::Result<RunOutcome> {
        info!("輸入為單一檔案：{}", path.display());
        let source_format = detect_format(path);
        self.console.println(&format!("Detected file format: {}", source_format))?;

        let mut tally = Tally::default();
        match self.ask_and_dispatch(prompt, path, &source_format, None)? {
            Step::Dispatched(outcome) => tally.record(outcome),
            Step::Halt => return Ok(RunOutcome::Halted { processed: 0 }),
        }
        Ok(tally.completed())
    }

    fn process_directory(
        &mut self,
        prompt: &mut Prompt<&mut dyn BufRead>,
        dir: &Path,
    ) -> io::Result<RunOutcome> {
        let entries = list_entries(dir)?;
        info!("輸入為目錄：{}，共 {} 個項目", dir.display(), entries.len());

        let mut tally = Tally::default();
        match entries.as_slice() {
            [] => {
                warn!("目錄中沒有可轉換的檔案：{}", dir.display());
                self.console.println(EMPTY_DIRECTORY_MESSAGE)?;
                return Ok(RunOutcome::EmptyDirectory);
            }
            [single] => {
                let name = entry_name(single);
                self.console.println(&format!(
                    "Only one file found. Converting the file: {}",
                    name
                ))?;
                let source_format = detect_format(single);
                match self.ask_and_dispatch(prompt, single, &source_format, Some(&name))? {
                    Step::Dispatched(outcome) => tally.record(outcome),
                    Step::Halt => return Ok(RunOutcome::Halted { processed: 0 }),
                }
            }
            many => {
                self.console.println(MULTIPLE_FILES_MESSAGE)?;
                for entry in many {
                    let name = entry_name(entry);
                    let source_format = detect_format(entry);
                    self.console.println(&format!(
                        "Detected file format: {} for file: {}",
                        source_format, name
                    ))?;
                    match self.ask_and_dispatch(prompt, entry, &source_format, Some(&name))? {
                        Step::Dispatched(outcome) => tally.record(outcome),
                        Step::Halt => {
                            info!("無效選擇，中止剩餘 {} 個項目", many.len() - tally.processed());
                            return Ok(RunOutcome::Halted {
                                processed: tally.processed(),
                            });
                        }
                    }
                }
            }
        }
        Ok(tally.completed())
    }

    fn ask_and_dispatch(
        &mut self,
        prompt: &mut Prompt<&mut dyn BufRead>,
        path: &Path,
        source_format: &str,
        name: Option<&str>,
    ) -> io::Result<Step> {
        let target = match prompt.ask_target()? {
            Selection::Target(target) => target,
            Selection::Invalid(raw) => {
                warn!("無效的選擇：{:?}，檔案：{}", raw, path.display());
                self.console.println(INVALID_CHOICE_MESSAGE)?;
                return Ok(Step::Halt);
            }
        };

        match name {
            Some(name) => self.console.println(&format!(
                "The file {} will be converted to: {}",
                name, target
            ))?,
            None => self
                .console
                .println(&format!("The file will be converted to: {}", target))?,
        }

        let outcome = self.dispatcher.dispatch(source_format, target, path)?;
        Ok(Step::Dispatched(outcome))
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn run(&mut self, input: &mut dyn BufRead) -> io::Result<RunOutcome> {
        let mut prompt = Prompt::new(input, self.console.clone());
        let outcome = match self.walk(&mut prompt) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("走訪輸入失敗：{}", e);
                if let Err(write_err) = self.console.println(&format!("{}: {}", INPUT_ERROR_LABEL, e)) {
                    error!("終端輸出失敗：{}", write_err);
                }
                RunOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        // 無論結果如何都等待已啟動的背景轉換
        self.dispatcher.wait_all();
        Ok(outcome)
    }
}

/// 列出目錄的直接項目（不遞迴），依檔名排序
pub fn list_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        entries.push(entry?.into_path());
    }
    Ok(entries)
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
