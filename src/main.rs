use file_converter::action::cli::process;

fn main() {
    // 所有失敗只以終端訊息呈現，結束碼維持 0
    if let Err(e) = process() {
        log::error!("程式執行失敗：{}", e);
        println!("{}", e);
    }
}
