use std::io::{self, BufRead};
use crate::models::format::TargetFormat;
use crate::utils::utils::ConsoleOutput;

pub const MENU: &str = "Choose the format you want to convert to:\n1. jpg\n2. png\n3. txt\n4. html\n5. pdf\n6. mp3\n7. folder\nYour choice: ";

pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice.";

/// 選單結果；`Invalid` 會中止整個批次
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Target(TargetFormat),
    Invalid(String),
}

pub fn resolve_selection(raw: &str) -> Selection {
    match TargetFormat::from_selector(raw) {
        Some(target) => Selection::Target(target),
        None => Selection::Invalid(raw.to_string()),
    }
}

/// 互動提示，輸入來源由呼叫端提供
pub struct Prompt<R: BufRead> {
    input: R,
    console: ConsoleOutput,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R, console: ConsoleOutput) -> Self {
        Prompt { input, console }
    }

    /// 顯示選單並讀取一行，僅去除換行字元，不驗證內容
    pub fn prompt_target(&mut self) -> io::Result<String> {
        self.console.print(MENU)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            log::warn!("輸入已結束，視為無效選擇");
            return Ok(String::new());
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn ask_target(&mut self) -> io::Result<Selection> {
        let raw = self.prompt_target()?;
        let selection = resolve_selection(&raw);
        log::debug!("使用者選擇：{:?}", selection);
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn menu_lists_targets_in_selector_order() {
        let listed: Vec<&str> = MENU
            .lines()
            .skip(1)
            .take(7)
            .map(|l| l.split_once(". ").unwrap().1)
            .collect();
        let expected: Vec<&str> = TargetFormat::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn strips_only_line_terminator() {
        let console = ConsoleOutput::from_writer(io::sink());
        let mut prompt = Prompt::new(Cursor::new("3\r\n 1\n"), console);
        assert_eq!(prompt.prompt_target().unwrap(), "3");
        assert_eq!(prompt.ask_target().unwrap(), Selection::Invalid(" 1".to_string()));
    }

    #[test]
    fn end_of_input_is_invalid() {
        let console = ConsoleOutput::from_writer(io::sink());
        let mut prompt = Prompt::new(Cursor::new(""), console);
        assert_eq!(prompt.ask_target().unwrap(), Selection::Invalid(String::new()));
    }
}
