//! Command-line surface for `novacore-admin`.

#![deny(clippy::all, clippy::pedantic)]

use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use novacore_admin::config::ConfigOverrides;
use novacore_admin::views::ActiveFilter;
use novacore_api_types::cms::{BlockType, PageStatus};

#[derive(Parser, Debug)]
#[command(
    name = "novacore-admin",
    version,
    about = "NovaCore admin console",
    long_about = None
)]
pub struct Cli {
    /// Explicit configuration file, layered over the defaults.
    #[arg(long, value_name = "PATH", env = "NOVACORE_CONFIG_FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Print raw JSON instead of rendered frames.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in, sign out and inspect the stored token
    Session(SessionArgs),
    /// Dashboard overview
    Home,
    /// Dashboard menus and their items
    Menus(MenusArgs),
    /// Dashboard settings
    Settings(SettingsArgs),
    /// CMS pages, blocks and versions
    Pages(PagesArgs),
    /// CMS page templates
    Templates(TemplatesArgs),
    /// CMS media library
    Media(MediaArgs),
    /// CMS form submissions
    Submissions(SubmissionsArgs),
    /// CMS site menus
    CmsMenus(CmsMenusArgs),
    /// Server-supplied option lists
    UiData(UiDataArgs),
}

#[derive(Parser, Debug)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub action: SessionCmd,
}

#[derive(Subcommand, Debug)]
pub enum SessionCmd {
    /// Store a bearer token (from `--token-file-input` or `NOVACORE_TOKEN`)
    Login {
        /// File holding the token to store
        #[arg(long, value_name = "PATH")]
        token_file_input: Option<PathBuf>,
        /// Token from env (no CLI flag, to keep it out of shell history)
        #[arg(hide = true, env = "NOVACORE_TOKEN")]
        token_env: Option<String>,
    },
    /// Forget the stored token
    Logout,
    /// Show whether a token is stored
    Status {
        /// Also check the token against the server
        #[arg(long, default_value_t = false)]
        verify: bool,
    },
}

#[derive(Parser, Debug)]
pub struct MenusArgs {
    #[command(subcommand)]
    pub action: MenusCmd,
}

#[derive(Subcommand, Debug)]
pub enum MenusCmd {
    /// List menus
    List {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
        /// Case-insensitive match on name or description
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a menu with its item tree
    Show { id: i64 },
    /// Create a menu
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Update a menu; omitted fields keep their current values
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a menu
    Delete { id: i64 },
    /// Flip a menu between active and inactive
    Toggle { id: i64 },
    /// Manage a menu's items
    Items(MenuItemsArgs),
}

#[derive(Parser, Debug)]
pub struct MenuItemsArgs {
    #[command(subcommand)]
    pub action: MenuItemsCmd,
}

#[derive(Args, Debug, Clone)]
pub struct MenuItemFields {
    #[arg(long, default_value = "")]
    pub label: String,
    #[arg(long, default_value = "")]
    pub url: String,
    #[arg(long, default_value = "")]
    pub icon: String,
    #[arg(long, default_value_t = 0)]
    pub order: i32,
    /// Parent item id; omit for a root item
    #[arg(long)]
    pub parent: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct MenuItemPatch {
    #[arg(long)]
    pub label: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    #[arg(long)]
    pub order: Option<i32>,
    #[arg(long, conflicts_with = "root")]
    pub parent: Option<i64>,
    /// Move the item to the top level
    #[arg(long, default_value_t = false)]
    pub root: bool,
}

#[derive(Subcommand, Debug)]
pub enum MenuItemsCmd {
    /// Add an item to a menu
    Add {
        menu_id: i64,
        #[command(flatten)]
        fields: MenuItemFields,
    },
    /// Update an item; omitted fields keep their current values
    Update {
        menu_id: i64,
        item_id: i64,
        #[command(flatten)]
        patch: MenuItemPatch,
    },
    /// Delete an item
    Delete { menu_id: i64, item_id: i64 },
    /// Flip an item's visibility
    Toggle { menu_id: i64, item_id: i64 },
    /// Set the item order
    Reorder {
        menu_id: i64,
        /// Item ids in their new order, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i64>,
    },
}

#[derive(Parser, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsCmd,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCmd {
    /// Show every setting with its editor widget
    Show,
    /// Change one setting's value and save
    Set { key: String, value: String },
    /// Flip a boolean setting and save
    Toggle { key: String },
}

#[derive(Parser, Debug)]
pub struct PagesArgs {
    #[command(subcommand)]
    pub action: PagesCmd,
}

#[derive(Args, Debug, Clone)]
pub struct PageFields {
    #[arg(long)]
    pub title: String,
    /// Defaults to a slug derived from the title
    #[arg(long, default_value = "")]
    pub slug: String,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long, conflicts_with = "content")]
    pub content_file: Option<PathBuf>,
    #[arg(long)]
    pub template_id: Option<i64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PagePatch {
    #[arg(long)]
    pub title: Option<String>,
    /// Keeps the stored slug unless given
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long, conflicts_with = "content")]
    pub content_file: Option<PathBuf>,
    #[arg(long)]
    pub template_id: Option<i64>,
}

#[derive(Subcommand, Debug)]
pub enum PagesCmd {
    /// List pages with optional filters
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long, value_enum)]
        status: Option<PageStatusArg>,
        #[arg(long)]
        template_id: Option<i64>,
        #[arg(long)]
        created_by: Option<i64>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a page by id or slug, with blocks and versions
    Show {
        #[arg(required_unless_present = "slug")]
        id: Option<i64>,
        #[arg(long, conflicts_with = "id")]
        slug: Option<String>,
    },
    /// Create a page
    Create(PageFields),
    /// Update a page; omitted fields keep their current values
    Update {
        id: i64,
        #[command(flatten)]
        patch: PagePatch,
    },
    /// Publish a page
    Publish { id: i64 },
    /// Move a page back to draft
    Unpublish { id: i64 },
    /// Archive a page
    Archive { id: i64 },
    /// Copy a page
    Duplicate { id: i64 },
    /// Delete a page
    Delete { id: i64 },
    /// Manage a page's blocks
    Blocks(BlocksArgs),
    /// Manage a page's versions
    Versions(VersionsArgs),
}

#[derive(Parser, Debug)]
pub struct BlocksArgs {
    #[command(subcommand)]
    pub action: BlocksCmd,
}

#[derive(Subcommand, Debug)]
pub enum BlocksCmd {
    /// Add a block to a page
    Add {
        page_id: i64,
        #[arg(long = "type", value_enum)]
        block_type: BlockTypeArg,
        /// Block configuration, passed through untouched
        #[arg(long)]
        configuration: Option<String>,
        #[arg(long, conflicts_with = "configuration")]
        configuration_file: Option<PathBuf>,
        #[arg(long, default_value_t = 0)]
        order: i32,
    },
    /// Update a block
    Update {
        page_id: i64,
        block_id: i64,
        #[arg(long = "type", value_enum)]
        block_type: Option<BlockTypeArg>,
        #[arg(long)]
        configuration: Option<String>,
        #[arg(long, conflicts_with = "configuration")]
        configuration_file: Option<PathBuf>,
        #[arg(long)]
        order: Option<i32>,
    },
    /// Delete a block
    Delete { page_id: i64, block_id: i64 },
    /// Set the block order
    Reorder {
        page_id: i64,
        /// Block ids in their new order, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i64>,
    },
}

#[derive(Parser, Debug)]
pub struct VersionsArgs {
    #[command(subcommand)]
    pub action: VersionsCmd,
}

#[derive(Subcommand, Debug)]
pub enum VersionsCmd {
    /// List a page's versions
    List { page_id: i64 },
    /// Snapshot the page as a new version
    Create { page_id: i64 },
    /// Restore a version
    Restore { page_id: i64, version_id: i64 },
}

#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub action: TemplatesCmd,
}

#[derive(Args, Debug, Clone)]
pub struct TemplateFields {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long, conflicts_with = "content")]
    pub content_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TemplatePatch {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long, conflicts_with = "content")]
    pub content_file: Option<PathBuf>,
    /// Show or hide the template in pickers
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub active: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum TemplatesCmd {
    /// List templates
    List,
    /// Show a template
    Show { id: i64 },
    /// Create a template
    Create(TemplateFields),
    /// Update a template; omitted fields keep their current values
    Update {
        id: i64,
        #[command(flatten)]
        patch: TemplatePatch,
    },
    /// Delete a template
    Delete { id: i64 },
}

#[derive(Parser, Debug)]
pub struct MediaArgs {
    #[command(subcommand)]
    pub action: MediaCmd,
}

#[derive(Subcommand, Debug)]
pub enum MediaCmd {
    /// List media
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Upload a file
    Upload { file: PathBuf },
    /// Delete a media item
    Delete { id: i64 },
}

#[derive(Parser, Debug)]
pub struct SubmissionsArgs {
    #[command(subcommand)]
    pub action: SubmissionsCmd,
}

#[derive(Subcommand, Debug)]
pub enum SubmissionsCmd {
    /// List submissions
    List {
        /// Only submissions for this page
        #[arg(long)]
        page_id: Option<i64>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Show one submission
    Show { id: i64 },
}

#[derive(Parser, Debug)]
pub struct CmsMenusArgs {
    #[command(subcommand)]
    pub action: CmsMenusCmd,
}

#[derive(Subcommand, Debug)]
pub enum CmsMenusCmd {
    /// List site menus
    List {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    /// Show a site menu by id or name
    Show {
        #[arg(required_unless_present = "name")]
        id: Option<i64>,
        #[arg(long, conflicts_with = "id")]
        name: Option<String>,
    },
    /// Create a site menu
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Update a site menu; omitted fields keep their current values
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a site menu
    Delete { id: i64 },
}

#[derive(Parser, Debug)]
pub struct UiDataArgs {
    #[command(subcommand)]
    pub action: UiDataCmd,
}

#[derive(Subcommand, Debug)]
pub enum UiDataCmd {
    /// Setting data types and menu statuses
    Dashboard,
    /// Page statuses, block types and templates
    Cms,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Inactive,
}

impl From<FilterArg> for ActiveFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => Self::All,
            FilterArg::Active => Self::Active,
            FilterArg::Inactive => Self::Inactive,
        }
    }
}

impl fmt::Display for FilterArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ActiveFilter::from(*self).fmt(f)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PageStatusArg {
    Draft,
    Published,
    Archived,
}

impl From<PageStatusArg> for PageStatus {
    fn from(value: PageStatusArg) -> Self {
        match value {
            PageStatusArg::Draft => Self::Draft,
            PageStatusArg::Published => Self::Published,
            PageStatusArg::Archived => Self::Archived,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BlockTypeArg {
    Text,
    Image,
    Video,
    Form,
    Gallery,
    Code,
}

impl From<BlockTypeArg> for BlockType {
    fn from(value: BlockTypeArg) -> Self {
        match value {
            BlockTypeArg::Text => Self::Text,
            BlockTypeArg::Image => Self::Image,
            BlockTypeArg::Video => Self::Video,
            BlockTypeArg::Form => Self::Form,
            BlockTypeArg::Gallery => Self::Gallery,
            BlockTypeArg::Code => Self::Code,
        }
    }
}
