//! Static message catalogs for the console (English and Persian).

use std::fmt;
use std::str::FromStr;

use novacore_api_types::cms::PageStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Fa,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fa => "fa",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Fa => &FA,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "fa" | "fa-ir" => Ok(Self::Fa),
            other => Err(format!("unsupported locale `{other}` (expected en or fa)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct Messages {
    pub app_name: &'static str,
    pub app_subtitle: &'static str,
    pub version_label: &'static str,
    pub nav_home: &'static str,
    pub nav_menus: &'static str,
    pub nav_settings: &'static str,
    pub nav_cms: &'static str,
    pub loading: &'static str,
    pub filter_all: &'static str,
    pub active: &'static str,
    pub inactive: &'static str,
    pub visible: &'static str,
    pub hidden: &'static str,
    pub draft: &'static str,
    pub published: &'static str,
    pub archived: &'static str,
    pub no_parent: &'static str,
    pub items_count: &'static str,
    pub template_label: &'static str,
    pub created_label: &'static str,
    pub updated_label: &'static str,
    pub search_label: &'static str,
    pub page_label: &'static str,
    pub previous_page: &'static str,
    pub next_page: &'static str,
    pub status_label: &'static str,

    pub home_title: &'static str,
    pub home_welcome: &'static str,
    pub stat_menus: &'static str,
    pub stat_menus_hint: &'static str,
    pub stat_settings: &'static str,
    pub stat_settings_hint: &'static str,
    pub stat_visits: &'static str,
    pub stat_visits_hint: &'static str,
    pub stat_users: &'static str,
    pub stat_users_hint: &'static str,
    pub recent_activity: &'static str,
    pub system_status: &'static str,
    pub status_server: &'static str,
    pub status_server_value: &'static str,
    pub status_database: &'static str,
    pub status_database_value: &'static str,
    pub status_gateway: &'static str,
    pub status_gateway_value: &'static str,

    pub menus_title: &'static str,
    pub menus_subtitle: &'static str,
    pub menus_empty: &'static str,
    pub menus_empty_hint: &'static str,
    pub menu_items_heading: &'static str,
    pub menu_items_empty: &'static str,
    pub menu_name_required: &'static str,
    pub item_label_required: &'static str,
    pub item_url_required: &'static str,
    pub menus_load_failed: &'static str,
    pub menu_detail_failed: &'static str,
    pub menu_save_failed: &'static str,
    pub menu_delete_failed: &'static str,
    pub menu_toggle_failed: &'static str,
    pub item_save_failed: &'static str,
    pub item_delete_failed: &'static str,
    pub item_toggle_failed: &'static str,
    pub item_reorder_failed: &'static str,

    pub settings_title: &'static str,
    pub settings_subtitle: &'static str,
    pub settings_empty: &'static str,
    pub settings_load_failed: &'static str,
    pub settings_save_failed: &'static str,
    pub settings_saved: &'static str,
    pub menu_reference_placeholder: &'static str,

    pub pages_title: &'static str,
    pub pages_subtitle: &'static str,
    pub pages_empty: &'static str,
    pub pages_empty_hint: &'static str,
    pub page_title_required: &'static str,
    pub pages_load_failed: &'static str,
    pub page_action_failed: &'static str,
    pub page_save_failed: &'static str,

    pub templates_title: &'static str,
    pub templates_empty: &'static str,
    pub template_name_required: &'static str,
    pub template_content_required: &'static str,
    pub templates_load_failed: &'static str,
    pub template_save_failed: &'static str,
    pub template_delete_failed: &'static str,

    pub media_title: &'static str,
    pub media_empty: &'static str,
    pub media_load_failed: &'static str,
    pub media_upload_failed: &'static str,
    pub media_delete_failed: &'static str,

    pub submissions_title: &'static str,
    pub submissions_empty: &'static str,
    pub submissions_load_failed: &'static str,

    pub cms_menus_title: &'static str,
    pub cms_menus_empty: &'static str,
    pub cms_menus_load_failed: &'static str,
    pub cms_menu_save_failed: &'static str,
    pub cms_menu_delete_failed: &'static str,

    pub unauthorized: &'static str,
}

impl Messages {
    pub fn page_status(&self, status: PageStatus) -> &'static str {
        match status {
            PageStatus::Draft => self.draft,
            PageStatus::Published => self.published,
            PageStatus::Archived => self.archived,
        }
    }

    pub fn activity(&self, active: bool) -> &'static str {
        if active { self.active } else { self.inactive }
    }

    pub fn visibility(&self, visible: bool) -> &'static str {
        if visible { self.visible } else { self.hidden }
    }
}

static EN: Messages = Messages {
    app_name: "NovaCore",
    app_subtitle: "System management and control",
    version_label: "Version",
    nav_home: "Dashboard",
    nav_menus: "Menus",
    nav_settings: "Settings",
    nav_cms: "Content",
    loading: "Loading...",
    filter_all: "All",
    active: "Active",
    inactive: "Inactive",
    visible: "Visible",
    hidden: "Hidden",
    draft: "Draft",
    published: "Published",
    archived: "Archived",
    no_parent: "No parent",
    items_count: "Items",
    template_label: "Template",
    created_label: "Created",
    updated_label: "Updated",
    search_label: "Search",
    page_label: "Page",
    previous_page: "previous",
    next_page: "next",
    status_label: "Status",

    home_title: "Dashboard overview",
    home_welcome: "Welcome! Here is a summary of your system status.",
    stat_menus: "Total menus",
    stat_menus_hint: "Active system menus",
    stat_settings: "Active settings",
    stat_settings_hint: "Configured settings",
    stat_visits: "Visits today",
    stat_visits_hint: "Visitors today",
    stat_users: "Active users",
    stat_users_hint: "Users online",
    recent_activity: "Recent activity",
    system_status: "System status",
    status_server: "Server",
    status_server_value: "Online",
    status_database: "Database",
    status_database_value: "Connected",
    status_gateway: "API Gateway",
    status_gateway_value: "Active",

    menus_title: "Menu management",
    menus_subtitle: "Create and manage system menus",
    menus_empty: "No menus found",
    menus_empty_hint: "Start by creating your first menu",
    menu_items_heading: "Menu items",
    menu_items_empty: "This menu has no items",
    menu_name_required: "Menu name is required",
    item_label_required: "Item label is required",
    item_url_required: "URL is required",
    menus_load_failed: "Failed to load menus",
    menu_detail_failed: "Failed to load menu details",
    menu_save_failed: "Failed to save menu",
    menu_delete_failed: "Failed to delete menu",
    menu_toggle_failed: "Failed to change menu status",
    item_save_failed: "Failed to save menu item",
    item_delete_failed: "Failed to delete item",
    item_toggle_failed: "Failed to change item status",
    item_reorder_failed: "Failed to reorder items",

    settings_title: "Dashboard settings",
    settings_subtitle: "Manage and configure system settings",
    settings_empty: "No settings found",
    settings_load_failed: "Failed to load settings",
    settings_save_failed: "Failed to save settings",
    settings_saved: "Settings saved successfully",
    menu_reference_placeholder: "Menu id",

    pages_title: "Content management",
    pages_subtitle: "Create and manage site pages and content",
    pages_empty: "No pages found",
    pages_empty_hint: "Start by creating your first page",
    page_title_required: "Page title is required",
    pages_load_failed: "Failed to load pages",
    page_action_failed: "Failed to update page",
    page_save_failed: "Failed to save page",

    templates_title: "Page templates",
    templates_empty: "No templates found",
    template_name_required: "Template name is required",
    template_content_required: "Template content is required",
    templates_load_failed: "Failed to load templates",
    template_save_failed: "Failed to save template",
    template_delete_failed: "Failed to delete template",

    media_title: "Media library",
    media_empty: "No media found",
    media_load_failed: "Failed to load media",
    media_upload_failed: "Failed to upload file",
    media_delete_failed: "Failed to delete media",

    submissions_title: "Form submissions",
    submissions_empty: "No submissions found",
    submissions_load_failed: "Failed to load form submissions",

    cms_menus_title: "Site menus",
    cms_menus_empty: "No menus found",
    cms_menus_load_failed: "Failed to load menus",
    cms_menu_save_failed: "Failed to save menu",
    cms_menu_delete_failed: "Failed to delete menu",

    unauthorized: "Your session has expired; sign in again",
};

static FA: Messages = Messages {
    app_name: "NovaCore",
    app_subtitle: "مدیریت و کنترل سیستم",
    version_label: "نسخه",
    nav_home: "داشبورد",
    nav_menus: "منوها",
    nav_settings: "تنظیمات",
    nav_cms: "محتوا",
    loading: "در حال بارگذاری...",
    filter_all: "همه",
    active: "فعال",
    inactive: "غیرفعال",
    visible: "قابل مشاهده",
    hidden: "مخفی",
    draft: "پیش‌نویس",
    published: "منتشر شده",
    archived: "آرشیو شده",
    no_parent: "بدون والد",
    items_count: "تعداد آیتم‌ها",
    template_label: "قالب",
    created_label: "ایجاد شده",
    updated_label: "به‌روزرسانی",
    search_label: "جستجو",
    page_label: "صفحه",
    previous_page: "قبلی",
    next_page: "بعدی",
    status_label: "وضعیت",

    home_title: "نمای کلی داشبورد",
    home_welcome: "خوش آمدید! اینجا خلاصه‌ای از وضعیت سیستم شما است.",
    stat_menus: "کل منوها",
    stat_menus_hint: "منوهای فعال سیستم",
    stat_settings: "تنظیمات فعال",
    stat_settings_hint: "تنظیمات پیکربندی شده",
    stat_visits: "بازدید امروز",
    stat_visits_hint: "بازدیدکنندگان امروز",
    stat_users: "کاربران فعال",
    stat_users_hint: "کاربران آنلاین",
    recent_activity: "فعالیت‌های اخیر",
    system_status: "وضعیت سیستم",
    status_server: "سرور",
    status_server_value: "آنلاین",
    status_database: "پایگاه داده",
    status_database_value: "متصل",
    status_gateway: "API Gateway",
    status_gateway_value: "فعال",

    menus_title: "مدیریت منوها",
    menus_subtitle: "ایجاد و مدیریت منوهای سیستم",
    menus_empty: "منویی یافت نشد",
    menus_empty_hint: "شروع کنید با ایجاد اولین منو",
    menu_items_heading: "آیتم‌های منو",
    menu_items_empty: "هیچ آیتمی در این منو وجود ندارد",
    menu_name_required: "نام منو الزامی است",
    item_label_required: "برچسب آیتم الزامی است",
    item_url_required: "آدرس URL الزامی است",
    menus_load_failed: "خطا در بارگذاری منوها",
    menu_detail_failed: "خطا در بارگذاری جزئیات منو",
    menu_save_failed: "خطا در ذخیره منو",
    menu_delete_failed: "خطا در حذف منو",
    menu_toggle_failed: "خطا در تغییر وضعیت منو",
    item_save_failed: "خطا در ذخیره آیتم منو",
    item_delete_failed: "خطا در حذف آیتم",
    item_toggle_failed: "خطا در تغییر وضعیت آیتم",
    item_reorder_failed: "خطا در تغییر ترتیب آیتم‌ها",

    settings_title: "تنظیمات داشبورد",
    settings_subtitle: "مدیریت و پیکربندی تنظیمات سیستم",
    settings_empty: "هیچ تنظیماتی یافت نشد",
    settings_load_failed: "خطا در بارگذاری تنظیمات",
    settings_save_failed: "خطا در ذخیره تنظیمات",
    settings_saved: "تنظیمات با موفقیت ذخیره شد",
    menu_reference_placeholder: "شناسه منو",

    pages_title: "مدیریت محتوا",
    pages_subtitle: "ایجاد و مدیریت صفحات و محتوای سایت",
    pages_empty: "صفحه‌ای یافت نشد",
    pages_empty_hint: "شروع کنید با ایجاد اولین صفحه",
    page_title_required: "عنوان صفحه الزامی است",
    pages_load_failed: "خطا در بارگذاری صفحات",
    page_action_failed: "خطا در تغییر وضعیت صفحه",
    page_save_failed: "خطا در ذخیره صفحه",

    templates_title: "قالب‌های صفحه",
    templates_empty: "قالبی یافت نشد",
    template_name_required: "نام قالب الزامی است",
    template_content_required: "محتوای قالب الزامی است",
    templates_load_failed: "خطا در بارگذاری قالب‌ها",
    template_save_failed: "خطا در ذخیره قالب",
    template_delete_failed: "خطا در حذف قالب",

    media_title: "کتابخانه رسانه",
    media_empty: "رسانه‌ای یافت نشد",
    media_load_failed: "خطا در بارگذاری رسانه‌ها",
    media_upload_failed: "خطا در بارگذاری فایل",
    media_delete_failed: "خطا در حذف رسانه",

    submissions_title: "فرم‌های ارسال‌شده",
    submissions_empty: "هیچ فرمی ارسال نشده است",
    submissions_load_failed: "خطا در بارگذاری فرم‌های ارسال‌شده",

    cms_menus_title: "منوهای سایت",
    cms_menus_empty: "منویی یافت نشد",
    cms_menus_load_failed: "خطا در بارگذاری منوها",
    cms_menu_save_failed: "خطا در ذخیره منو",
    cms_menu_delete_failed: "خطا در حذف منو",

    unauthorized: "نشست شما منقضی شده است؛ دوباره وارد شوید",
};
