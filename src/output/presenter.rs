use std::io::{self, Write};

use super::config::{OutputConfig, OutputFormat};
use super::types::Envelope;

pub trait Presenter: Send + Sync {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()>;
}

pub struct JsonPresenter { pub pretty: bool }
impl Presenter for JsonPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, env).map_err(to_io)? }
        writeln!(w)
    }
}

/// Human rendering: the prepared text verbatim, or the raw result when a
/// command has none.
pub struct TextPresenter { pub pretty: bool }
impl Presenter for TextPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if let Some(text) = &env.text {
            return writeln!(w, "{text}");
        }
        writeln!(w, "Result: {}", env.op)?;
        if self.pretty {
            serde_json::to_writer_pretty(&mut *w, &env.result).map_err(to_io)?;
            writeln!(w)?;
        }
        Ok(())
    }
}

pub struct Emitter {
    presenter: Box<dyn Presenter>,
}

impl Emitter {
    pub fn new(cfg: OutputConfig) -> Self {
        let presenter: Box<dyn Presenter> = match cfg.format {
            OutputFormat::Json => Box::new(JsonPresenter { pretty: cfg.pretty }),
            OutputFormat::Text => Box::new(TextPresenter { pretty: cfg.pretty }),
        };
        Emitter { presenter }
    }

    pub fn emit(&self, env: &Envelope) -> io::Result<()> {
        let mut out = io::stdout().lock();
        self.presenter.emit(env, &mut out)?;
        out.flush()
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::new(io::ErrorKind::Other, e) }

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(p: &dyn Presenter, env: &Envelope) -> String {
        let mut buf: Vec<u8> = Vec::new();
        p.emit(env, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_presenter_prints_report_verbatim() {
        let env = Envelope::result("check", &json!({"pages": 2}), None).unwrap()
            .with_text("Hello dear Isaac Clarke!".to_string());
        assert_eq!(render(&TextPresenter { pretty: false }, &env), "Hello dear Isaac Clarke!\n");
    }

    #[test]
    fn text_presenter_falls_back_to_op_name() {
        let env = Envelope::result("pages", &json!({"pages": []}), None).unwrap();
        assert_eq!(render(&TextPresenter { pretty: false }, &env), "Result: pages\n");
    }

    #[test]
    fn json_presenter_writes_single_line() {
        let env = Envelope::result("check", &json!({"pages": 2}), None).unwrap()
            .with_text("ignored in json".to_string());
        let s = render(&JsonPresenter { pretty: false }, &env);
        assert_eq!(s.lines().count(), 1);
        assert!(s.contains("\"op\":\"check\""));
        assert!(!s.contains("ignored in json"));
    }
}
