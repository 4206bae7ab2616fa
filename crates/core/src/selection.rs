/// Detail surface capability: accepts replacement text for display.
///
/// `publish` fully replaces whatever was previously shown; the surface
/// never sees partial updates.
pub trait DetailSink {
    fn publish(&mut self, text: String);
}

/// External collaborator turning a node into display text.
///
/// The text may contain markup; the coordinator treats it as opaque. A
/// blanket implementation covers plain closures, so callers can pass
/// `|node| Ok(render(node))` directly.
pub trait Describe<N: ?Sized> {
    type Error;

    fn describe(&self, node: &N) -> Result<String, Self::Error>;
}

impl<N: ?Sized, E, F> Describe<N> for F
where
    F: Fn(&N) -> Result<String, E>,
{
    type Error = E;

    fn describe(&self, node: &N) -> Result<String, E> {
        self(node)
    }
}

/// Bridges tree-selection events to detail-view refreshes, one-way and
/// strictly synchronously.
///
/// The coordinator is the sole subscriber of the tree surface's
/// selection-changed event. It keeps no state between calls; each call is
/// independent and idempotent for the same path.
pub struct SelectionCoordinator<D, S> {
    describer: D,
    sink: S,
}

impl<D, S> SelectionCoordinator<D, S> {
    pub fn new(describer: D, sink: S) -> Self {
        Self { describer, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Handles a selection change. `path` runs from the root to the newly
    /// selected node; an empty path means the selection was cleared, which
    /// deliberately leaves the detail surface showing its previous text.
    ///
    /// Publishing is all-or-nothing: the describer runs first and its
    /// failure propagates unchanged to the caller without touching the
    /// sink, so either the old text remains or the new text fully replaces
    /// it.
    pub fn on_selection_changed<N>(&mut self, path: &[&N]) -> Result<(), D::Error>
    where
        D: Describe<N>,
        S: DetailSink,
    {
        let Some(node) = path.last().copied() else {
            return Ok(());
        };
        let text = self.describer.describe(node)?;
        self.sink.publish(text);
        Ok(())
    }
}
