pub mod module_kind;
pub mod page;

pub use module_kind::ModuleKind;
pub use page::Page;
