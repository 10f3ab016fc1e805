use sajs::lexer::{Lexer, State};
use sajs::status::Status;
use sajs::writer::Writer;

#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        let mut stack = vec![State::default(); 256];
        let Ok(mut lexer) = Lexer::new(&mut stack) else {
            return;
        };
        let mut writer = Writer::new();

        let mut ok = true;
        for &b in data {
            if !ok {
                break;
            }
            let r = lexer.read_byte(Some(b));
            let _ = writer.write_result(r.event, lexer.last_bytes());
            ok = r.status == Status::Success;
        }
        if ok {
            let r = lexer.read_byte(None);
            let _ = writer.write_result(r.event, lexer.last_bytes());
        }
    });
}
