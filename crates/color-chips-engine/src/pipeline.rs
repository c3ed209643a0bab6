//! Ordered tree-transform stages.
//!
//! A [`Pipeline`] runs its stages one after another over the same tree. Each
//! stage mutates the tree in place and is handed the result of the previous
//! one.

use tracing::debug;

use crate::tree::Node;

/// One in-place stage over a document tree.
pub trait Transform: Send + Sync {
    fn name(&self) -> &str;
    fn transform(&self, tree: &mut Node);
}

/// Wraps a closure as a stage.
pub struct FnTransform<F> {
    name: String,
    f: F,
}

impl<F> FnTransform<F>
where
    F: Fn(&mut Node) + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Transform for FnTransform<F>
where
    F: Fn(&mut Node) + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self, tree: &mut Node) {
        (self.f)(tree)
    }
}

#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stage(mut self, stage: impl Transform + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn push(&mut self, stage: Box<dyn Transform>) {
        self.stages.push(stage);
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, tree: &mut Node) {
        for stage in &self.stages {
            debug!(stage = stage.name(), "running stage");
            stage.transform(tree);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chips::ColorChips;
    use crate::tree::visit_text_mut;

    #[test]
    fn stages_run_in_order() {
        let pipeline = Pipeline::new()
            .with_stage(FnTransform::new("append-a", |tree: &mut Node| {
                visit_text_mut(tree, &mut |v: &mut String| v.push('a'))
            }))
            .with_stage(FnTransform::new("append-b", |tree: &mut Node| {
                visit_text_mut(tree, &mut |v: &mut String| v.push('b'))
            }));

        let mut tree = Node::root(vec![Node::text("x")]);
        pipeline.run(&mut tree);
        assert_eq!(tree.text_content(), "xab");
        assert_eq!(pipeline.stage_names(), vec!["append-a", "append-b"]);
    }

    #[test]
    fn color_chips_registers_as_stage() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Box::new(ColorChips::default()));

        let mut tree = Node::root(vec![Node::element("p", vec![Node::text("#fff")])]);
        pipeline.run(&mut tree);

        let p = &tree.children().unwrap()[0];
        assert_eq!(p.children().unwrap()[0].tag_name(), Some("span"));
        assert_eq!(pipeline.stage_names(), vec!["color-chips"]);
    }

    #[test]
    fn empty_pipeline_is_noop() {
        let original = Node::root(vec![Node::text("#fff")]);
        let mut tree = original.clone();
        Pipeline::new().run(&mut tree);
        assert_eq!(tree, original);
    }
}
