use std::io::{
    self,
    Write
};
use std::process::ExitCode;

use sinequad::application;
use sinequad::logging;

fn main() -> ExitCode {
    logging::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match application::run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // stderr 關閉時不可 panic，結束碼必須維持 1
            let _ = writeln!(io::stderr(), "{}", error);
            ExitCode::from(1)
        }
    }
}
