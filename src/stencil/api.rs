//! # API Facade
//!
//! Single entry point for a scaffolding run, regardless of the UI driving it.
//! The facade sequences the pipeline stages and merges their results; it does
//! no terminal I/O and no business logic of its own.
//!
//! `ScaffoldApi<S: TemplateSource>` is generic over the template origin:
//! production uses `GitSource`, tests and offline runs use `DirSource`.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ScaffoldRequest;
use crate::source::TemplateSource;

pub struct ScaffoldApi<S: TemplateSource> {
    source: S,
}

impl<S: TemplateSource> ScaffoldApi<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run one full scaffold: resolve → fetch → copy → substitute → readme.
    ///
    /// The fetched checkout is owned by this stack frame, so its temporary
    /// directory is removed on every path out of here, early errors included.
    pub fn scaffold(&self, req: &ScaffoldRequest) -> Result<CmdResult> {
        let mut result = commands::resolve::run(req)?;

        let template = self.source.fetch()?;
        result.merge(commands::copy::run(req, template.root())?);
        result.merge(commands::substitute::run(&req.project_dir(), &req.name)?);
        result.merge(commands::readme::run(req)?);

        result.add_message(CmdMessage::success(format!(
            "Scaffolded project '{}' at {}",
            req.name,
            req.project_dir().display()
        )));
        Ok(result)
    }
}
