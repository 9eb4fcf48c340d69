// crates/usecase/src/options.rs
use derive_builder::Builder;
use load_all_shared_kernel::KindLabel;

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct ScanOptions {
    /// Label for the `Adding <kind> from <name>` line; `None` keeps the scan silent.
    #[builder(setter(custom))]
    pub kind: Option<KindLabel>,
}

impl ScanOptions {
    /// Options carrying `kind` as label. `None` and `Some("")` both mean "no label".
    pub fn with_kind(kind: Option<&str>) -> Self {
        Self { kind: kind.and_then(KindLabel::new) }
    }

    pub fn kind(&self) -> Option<&KindLabel> {
        self.kind.as_ref()
    }
}

impl ScanOptionsBuilder {
    pub fn kind(&mut self, kind: impl Into<String>) -> &mut Self {
        self.kind = Some(KindLabel::new(kind));
        self
    }
}
