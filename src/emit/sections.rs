//! Sections of the generated module
//!
//! The module is emitted as a fixed sequence of sections. Data-driven
//! sections (header, name table, asset map) are rendered here; the record
//! type and the runtime functions are static templates.

use std::io::{self, Write};

use crate::config::EncoderConfig;
use crate::domain::codec::literal::HexWriter;
use crate::domain::entities::{Asset, AssetTable};

const IMPORTS: &str = include_str!("templates/imports.rs.in");
const FILE_TYPE: &str = include_str!("templates/file_type.rs.in");
const ASSET_FUNCS: &str = include_str!("templates/asset_funcs.rs.in");
const FILE_SYSTEM: &str = include_str!("templates/file_system.rs.in");
const HASH_FUNCS: &str = include_str!("templates/hash_funcs.rs.in");

/// Provenance line at the top of every generated file
pub const GENERATED_MARKER: &str = "// Code generated by genesis. DO NOT EDIT.";

/// One section of the generated module, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Provenance comment, cfg line, `pub mod` and imports
    Header,
    /// `ASSET_NAMES`
    AssetNames,
    /// `ASSET_MAP`
    AssetMap,
    /// `File` record type
    FileType,
    /// `asset`, `asset_file`, `asset_names`, `asset_name_with_hash`
    AssetFuncs,
    /// `FileSystem`, `HttpFile`, `FileServer`
    FileSystem,
    /// `join_name_hash`, `trim_name_hash`, `has_name_hash`
    HashFuncs,
    /// Closing brace of the module
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Header,
        Section::AssetNames,
        Section::AssetMap,
        Section::FileType,
        Section::AssetFuncs,
        Section::FileSystem,
        Section::HashFuncs,
        Section::Footer,
    ];

    fn template(self) -> Option<&'static str> {
        match self {
            Section::FileType => Some(FILE_TYPE),
            Section::AssetFuncs => Some(ASSET_FUNCS),
            Section::FileSystem => Some(FILE_SYSTEM),
            Section::HashFuncs => Some(HASH_FUNCS),
            _ => None,
        }
    }
}

/// Renders the generated module for one configuration and asset table
pub struct ModuleEmitter<'a> {
    config: &'a EncoderConfig,
    table: &'a AssetTable,
}

impl<'a> ModuleEmitter<'a> {
    pub fn new(config: &'a EncoderConfig, table: &'a AssetTable) -> Self {
        Self { config, table }
    }

    /// Write every section in order
    pub fn emit<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for section in Section::ALL {
            self.write_section(w, section)?;
        }
        Ok(())
    }

    pub fn write_section<W: Write>(&self, w: &mut W, section: Section) -> io::Result<()> {
        match section {
            Section::Header => write_header(w, self.config),
            Section::AssetNames => write_asset_names(w, self.table),
            Section::AssetMap => write_asset_map(w, self.table),
            Section::Footer => w.write_all(b"}\n"),
            other => match other.template() {
                Some(template) => write!(w, "\n{}", template),
                None => Ok(()),
            },
        }
    }

    /// Render a single section to a string
    pub fn render(&self, section: Section) -> String {
        let mut buf = Vec::new();
        // Writes into a Vec cannot fail.
        let _ = self.write_section(&mut buf, section);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Provenance comment, optional cfg line, module declaration and imports
pub fn write_header<W: Write>(w: &mut W, config: &EncoderConfig) -> io::Result<()> {
    writeln!(w, "{}", GENERATED_MARKER)?;
    writeln!(w)?;
    if let Some(attr) = config.build_tags().cfg_attribute() {
        writeln!(w, "{}", attr)?;
    }
    writeln!(w, "pub mod {} {{", config.module_name())?;
    w.write_all(IMPORTS.as_bytes())
}

/// `ASSET_NAMES`: every name in input order
pub fn write_asset_names<W: Write>(w: &mut W, table: &AssetTable) -> io::Result<()> {
    writeln!(w)?;
    if table.is_empty() {
        return writeln!(w, "    static ASSET_NAMES: &[&str] = &[];");
    }
    writeln!(w, "    static ASSET_NAMES: &[&str] = &[")?;
    for name in table.names() {
        writeln!(w, "        {:?},", name)?;
    }
    writeln!(w, "    ];")
}

/// `ASSET_MAP`: one insert per asset, in input order
///
/// A later duplicate name replaces the earlier entry when the map is built,
/// matching the table's lookup.
pub fn write_asset_map<W: Write>(w: &mut W, table: &AssetTable) -> io::Result<()> {
    writeln!(w)?;
    writeln!(
        w,
        "    static ASSET_MAP: LazyLock<HashMap<&'static str, File>> = LazyLock::new(|| {{"
    )?;
    if table.is_empty() {
        writeln!(w, "        HashMap::new()")?;
    } else {
        writeln!(w, "        let mut map = HashMap::new();")?;
        for asset in table.assets() {
            write_asset(w, asset)?;
        }
        writeln!(w, "        map")?;
    }
    writeln!(w, "    }});")
}

/// One `map.insert(...)` entry
pub fn write_asset<W: Write>(w: &mut W, asset: &Asset) -> io::Result<()> {
    let mod_time = asset.mod_time();
    writeln!(w, "        map.insert(")?;
    writeln!(w, "            {:?},", asset.name())?;
    writeln!(w, "            File {{")?;
    writeln!(w, "                name: {:?},", asset.name())?;
    writeln!(w, "                hash: \"{}\",", asset.hash())?;
    writeln!(w, "                size: {},", asset.size())?;
    writeln!(w, "                mod_time_secs: {},", mod_time.secs())?;
    writeln!(w, "                mod_time_nanos: {},", mod_time.nanos())?;
    write!(w, "                data: b\"")?;
    HexWriter::new(&mut *w).write_all(asset.data())?;
    writeln!(w, "\",")?;
    writeln!(w, "            }},")?;
    writeln!(w, "        );")
}
