// src/pipeline.rs
use crate::stage::Stage;
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }

    pub fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current) {
                continue;
            }

            current = stage.apply(current);
        }

        current
    }
}
