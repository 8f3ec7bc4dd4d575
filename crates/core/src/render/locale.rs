// User-facing strings. The dashboard is Arabic, right-to-left.

pub const LANG: &str = "ar";
pub const DIR: &str = "rtl";
pub const PAGE_TITLE: &str = "توصيات الأسهم السعودية";

pub const LABEL_BUY: &str = "شراء";
pub const LABEL_SELL: &str = "بيع";
pub const LABEL_OTHER: &str = "غير محدد";

pub const FILTER_ALL: &str = "الكل";
pub const FILTER_BUY: &str = "شراء";
pub const FILTER_SELL: &str = "بيع";

pub const STAT_TOTAL: &str = "إجمالي التوصيات";
pub const STAT_BUY: &str = "توصيات الشراء";
pub const STAT_SELL: &str = "توصيات البيع";
pub const STAT_AVG_CONFIDENCE: &str = "متوسط الثقة";

pub const CONFIDENCE_PREFIX: &str = "ثقة: ";
pub const ENTRY_PRICE: &str = "نقطة الدخول";
pub const TARGET_PRICE: &str = "الهدف";
pub const STOP_LOSS: &str = "وقف الخسارة";
pub const CURRENCY: &str = "ريال";
pub const DETAILS: &str = "التفاصيل";
pub const REFRESH: &str = "تحديث";

pub const LOADING: &str = "جاري التحميل...";
pub const NO_RESULTS: &str = "لا توجد توصيات";
pub const CONNECTION_ERROR: &str = "❌ خطأ في الاتصال بالسيرفر";
pub const FETCH_FAILED: &str = "فشل في جلب البيانات";

pub const DETAILS_TITLE: &str = "عرض تفاصيل السهم";
pub const DETAILS_COMING_SOON: &str = "سيتم إضافة صفحة التفاصيل قريباً...";
pub const BACK: &str = "رجوع";
