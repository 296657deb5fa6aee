use tracing::{debug, warn};

use crate::glyph::cipher::Cipher;
use crate::glyph::options::{StreamOptions, StreamOptionsUpdate};
use crate::render::surface::SurfaceFactory;
use crate::runtime::scheduler::{FrameCtx, FrameHandle};

/// A row of glyphs kept index-aligned with a word list.
///
/// Each child owns one surface from the factory; removing a child hands its surface back to
/// [`SurfaceFactory::destroy`].
pub struct CipherStream<F: SurfaceFactory> {
    factory: F,
    children: Vec<Cipher<F::Surface>>,
    options: StreamOptions,
}

impl<F: SurfaceFactory> CipherStream<F> {
    /// Empty stream.
    pub fn new(factory: F, options: StreamOptions) -> Self {
        Self {
            factory,
            children: Vec::new(),
            options,
        }
    }

    /// Child glyphs, in word order.
    pub fn children(&self) -> &[Cipher<F::Surface>] {
        &self.children
    }

    /// Surface of every child, in word order; `None` where creation failed.
    pub fn surfaces_mut(&mut self) -> impl Iterator<Item = Option<&mut F::Surface>> + '_ {
        self.children.iter_mut().map(|c| c.surface_mut())
    }

    /// Current word of every child.
    pub fn words(&self) -> Vec<String> {
        self.children.iter().map(|c| c.word().to_owned()).collect()
    }

    /// Merged options.
    pub fn options(&self) -> &StreamOptions {
        &self.options
    }

    /// Surface factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Return `true` when no child is mid-transition.
    pub fn is_idle(&self) -> bool {
        self.children.iter().all(|c| !c.is_animating())
    }

    /// Reconcile children with `words` and forward each word to its glyph.
    #[tracing::instrument(skip_all, fields(words = words.len(), children = self.children.len()))]
    pub fn update<W: AsRef<str>>(&mut self, words: &[W], ctx: &mut FrameCtx<'_>) {
        while self.children.len() > words.len() {
            self.pop(ctx);
        }

        for (i, word) in words.iter().enumerate() {
            if i >= self.children.len() {
                let surface = match self.factory.create(self.options.canvas_size) {
                    Ok(surface) => Some(surface),
                    Err(err) => {
                        warn!(index = i, %err, "surface creation failed; glyph will not draw");
                        None
                    }
                };
                debug!(index = i, "adding glyph");
                self.children
                    .push(Cipher::new(surface, self.options.individual_options));
            }
            self.children[i].update(word.as_ref(), ctx);
        }
    }

    /// Merge `update` into the options and rebuild every glyph with them.
    #[tracing::instrument(skip_all, fields(children = self.children.len()))]
    pub fn update_options(&mut self, update: &StreamOptionsUpdate, ctx: &mut FrameCtx<'_>) {
        self.options.merge(update);
        debug!(options = ?self.options, "options merged; rebuilding");
        self.update_hard(ctx);
    }

    /// Route a delivered frame to the glyph waiting for it.
    pub fn on_frame(&mut self, handle: FrameHandle, ctx: &mut FrameCtx<'_>) -> bool {
        self.children.iter_mut().any(|c| c.on_frame(handle, ctx))
    }

    fn update_hard(&mut self, ctx: &mut FrameCtx<'_>) {
        let words = self.words();
        while !self.children.is_empty() {
            self.pop(ctx);
        }
        self.update(&words, ctx);
    }

    fn pop(&mut self, ctx: &mut FrameCtx<'_>) {
        let Some(child) = self.children.pop() else {
            return;
        };
        debug!(index = self.children.len(), word = child.word(), "removing glyph");
        if let Some(surface) = child.teardown(ctx) {
            self.factory.destroy(surface);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/stream.rs"]
mod tests;
