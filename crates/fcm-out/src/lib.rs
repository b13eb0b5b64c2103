//! FCM-OUT: Compatibility Matrix Serializer
//!
//! Renders a [`CompatMatrix`] into the framework compatibility matrix XML
//! consumed by the build system. Tags and indentation are emitted literally,
//! matching the layout downstream tooling expects:
//!
//! ```text
//! <compatibility-matrix>
//!     <hal format="hidl" optional="true">
//!        <name>android.hardware.foo</name>
//!         <version>1.0-1</version>
//!         <interface>
//!            <name>IFoo</name>
//!            <instance>default</instance>
//!         </interface>
//!     </hal>
//! </compatibility-matrix>
//! ```

pub mod renderer;

pub use renderer::{format_version, render_entry, render_matrix};
