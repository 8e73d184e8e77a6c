use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let target_date = args.first().map(String::as_str);

    match haisou_shift::run(target_date) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("シフト生成に失敗しました: {error}");
            ExitCode::FAILURE
        }
    }
}
