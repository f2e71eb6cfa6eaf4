use strum_macros::{Display, EnumString};

use super::modules::commands::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    En,
    Fa,
}

/// Every user-visible string of one deployment language.
#[derive(Debug)]
pub struct Texts {
    /// `{name}` is replaced with the sender's first name.
    pub welcome: &'static str,
    pub default_name: &'static str,
    pub usage_title: &'static str,

    pub photo_caption: &'static str,
    pub choose_option: &'static str,
    pub inline_button: &'static str,
    pub website_button: &'static str,
    pub reply_options: [&'static str; 4],
    pub keyboard_removed: &'static str,
    pub share_prompt: &'static str,
    pub share_contact: &'static str,
    pub share_location: &'static str,
    pub inline_mode_prompt: &'static str,
    pub inline_mode_button: &'static str,
    pub poll_question: &'static str,
    pub poll_options: [&'static str; 2],
    pub deliberate_failure: &'static str,

    pub groups_only: &'static str,
    /// `{link}` is replaced with the exported invite link.
    pub invite_link: &'static str,
    pub invite_link_failed: &'static str,

    pub menu_view_properties: &'static str,
    pub menu_request_consultation: &'static str,
    pub menu_view_villa_photos: &'static str,
    pub menu_contact_us: &'static str,
    pub menu_prompt: &'static str,
    pub properties: &'static str,
    pub consultation: &'static str,
    pub no_photos: &'static str,
    pub contact: &'static str,
    pub invalid_command: &'static str,

    pub inline_results: [(&'static str, &'static str); 2],

    pub command_descriptions: &'static [(Command, &'static str)],
}

impl Texts {
    pub fn for_language(language: Language) -> &'static Texts {
        match language {
            Language::En => &ENGLISH,
            Language::Fa => &PERSIAN,
        }
    }

    pub fn command_description(&self, command: Command) -> &'static str {
        self.command_descriptions
            .iter()
            .find(|(c, _)| *c == command)
            .map(|(_, description)| *description)
            .unwrap_or_default()
    }
}

pub static ENGLISH: Texts = Texts {
    welcome: "Hello, {name}!\n\nWelcome to the villa booking bot. Pick an option from the menu below.",
    default_name: "friend",
    usage_title: "<b><u>Bot menu</u></b>:",

    photo_caption: "Read https://telegrambots.github.io/book/",
    choose_option: "Choose an option:",
    inline_button: "View properties",
    website_button: "Visit website",
    reply_options: ["Option 1", "Option 2", "Option 3", "Option 4"],
    keyboard_removed: "Keyboard removed.",
    share_prompt: "Share your contact or location:",
    share_contact: "Share contact",
    share_location: "Share location",
    inline_mode_prompt: "Press the button to start Inline Query\n\n(Make sure you enabled Inline Mode in @BotFather)",
    inline_mode_button: "Inline Mode",
    poll_question: "Which programming language do you prefer?",
    poll_options: ["Hello", "World!"],
    deliberate_failure: "Simulated failure.",

    groups_only: "This command only works in groups and supergroups.",
    invite_link: "Here is the invite link for this group:\n{link}",
    invite_link_failed: "Could not create an invite link. Make sure the bot is an admin and try again later.",

    menu_view_properties: "🏡 Properties",
    menu_request_consultation: "📞 Consultation",
    menu_view_villa_photos: "📷 Villa photos",
    menu_contact_us: "✉️ Contact us",
    menu_prompt: "Main menu:",
    properties: "Available properties:\n\n1. Seaside villa, 3 bedrooms, private pool\n2. Forest villa, 4 bedrooms, fireplace\n3. Mountain villa, 2 bedrooms, panoramic view",
    consultation: "Leave your phone number and our consultants will call you back shortly.",
    no_photos: "No villa photos are available right now.",
    contact: "Phone: +1 555 0100\nEmail: info@example.com\nOffice hours: 9:00 to 18:00",
    invalid_command: "Invalid command. Please use the menu below.",

    inline_results: [("Telegram.Bot", "Hello Telegram!"), ("Awesome", "Hello again!")],

    command_descriptions: &[
        (Command::Start, "Start the bot"),
        (Command::Help, "Show the main menu"),
        (Command::Photo, "Send a photo"),
        (Command::InlineButtons, "Send inline buttons"),
        (Command::Keyboard, "Send a reply keyboard"),
        (Command::Remove, "Remove the keyboard"),
        (Command::Request, "Request contact or location"),
        (Command::InlineMode, "Start an inline query"),
        (Command::Poll, "Send a poll"),
        (Command::PollAnonymous, "Send an anonymous poll"),
        (Command::Throw, "Simulate an error"),
        (Command::CreateLink, "Create a group invite link"),
    ],
};

pub static PERSIAN: Texts = Texts {
    welcome: "سلام {name}!\n\nبه ربات رزرو ویلا خوش آمدید. یکی از گزینه‌های منوی زیر را انتخاب کنید.",
    default_name: "کاربر",
    usage_title: "<b><u>منوی دستورات ربات</u></b>:",

    photo_caption: "مطالعه کنید https://telegrambots.github.io/book/",
    choose_option: "یک گزینه انتخاب کنید:",
    inline_button: "مشاهده املاک",
    website_button: "بازدید از گیت‌هاب",
    reply_options: ["گزینه 1", "گزینه 2", "گزینه 3", "گزینه 4"],
    keyboard_removed: "صفحه‌کلید حذف شد.",
    share_prompt: "مخاطب یا مکان خود را به اشتراک بگذارید:",
    share_contact: "اشتراک‌گذاری مخاطب",
    share_location: "اشتراک‌گذاری مکان",
    inline_mode_prompt: "برای شروع کوئری اینلاین دکمه را بزنید\n\n(حالت اینلاین باید در @BotFather فعال باشد)",
    inline_mode_button: "حالت اینلاین",
    poll_question: "کدام زبان برنامه‌نویسی را ترجیح می‌دهید؟",
    poll_options: ["سلام", "دنیا!"],
    deliberate_failure: "شبیه‌سازی خطا.",

    groups_only: "این دستور فقط در گروه‌ها و سوپرگروه‌ها کار می‌کند.",
    invite_link: "لینک دعوت این گروه:\n{link}",
    invite_link_failed: "ساخت لینک دعوت ممکن نشد. مطمئن شوید ربات ادمین است و بعدا دوباره تلاش کنید.",

    menu_view_properties: "🏡 مشاهده املاک",
    menu_request_consultation: "📞 درخواست مشاوره",
    menu_view_villa_photos: "📷 عکس ویلاها",
    menu_contact_us: "✉️ تماس با ما",
    menu_prompt: "منوی اصلی:",
    properties: "املاک موجود:\n\n1. ویلای ساحلی، ۳ خوابه، استخر اختصاصی\n2. ویلای جنگلی، ۴ خوابه، شومینه\n3. ویلای کوهستانی، ۲ خوابه، چشم‌انداز پانوراما",
    consultation: "شماره تماس خود را بگذارید تا مشاوران ما به زودی با شما تماس بگیرند.",
    no_photos: "در حال حاضر عکسی از ویلاها موجود نیست.",
    contact: "تلفن: ۰۲۱۱۲۳۴۵۶۷۸\nایمیل: info@example.com\nساعات کاری: ۹ تا ۱۸",
    invalid_command: "دستور نامعتبر است. لطفا از منوی زیر استفاده کنید.",

    inline_results: [("تلگرام.بات", "سلام تلگرام!"), ("فوق‌العاده است", "دوباره سلام!")],

    command_descriptions: &[
        (Command::Start, "شروع ربات"),
        (Command::Help, "نمایش منوی اصلی"),
        (Command::Photo, "ارسال یک عکس"),
        (Command::InlineButtons, "ارسال دکمه‌های اینلاین"),
        (Command::Keyboard, "ارسال صفحه‌کلید پاسخ‌گو"),
        (Command::Remove, "حذف صفحه‌کلید"),
        (Command::Request, "درخواست مخاطب یا مکان"),
        (Command::InlineMode, "شروع کوئری اینلاین"),
        (Command::Poll, "ارسال نظرسنجی"),
        (Command::PollAnonymous, "ارسال نظرسنجی ناشناس"),
        (Command::Throw, "شبیه‌سازی خطا"),
        (Command::CreateLink, "ساخت لینک دعوت گروه"),
    ],
};
