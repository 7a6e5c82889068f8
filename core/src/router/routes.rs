//! The back-office route table.

use super::RouteEntry;

/// Title applied for the layout and any child that has none of its own.
pub const LAYOUT_TITLE: &str = "后台管理系统";

pub fn admin_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/login", "login", "Login").title("登录"),
        RouteEntry::new("/download", "download", "Download").title("版本下载"),
        RouteEntry::new("/", "layout", "Layout")
            .title(LAYOUT_TITLE)
            .children(vec![
                RouteEntry::new("", "publicBar", "Home").title("公共栏管理"),
                RouteEntry::new("bill", "bill", "Bill").title("账单管理"),
                RouteEntry::new("announcement", "announcement", "Announcement").title("公告管理"),
                RouteEntry::new("customer", "customer", "Customer").title("客户管理"),
                RouteEntry::new("merchant", "merchant", "Merchant").title("卡商管理"),
                RouteEntry::new("phone", "phone", "Phone").title("号码管理"),
                RouteEntry::new("project", "project", "Project").title("项目管理"),
                RouteEntry::new("region", "region", "Region").title("地区管理"),
                RouteEntry::new("material", "material", "Material").title("资料管理"),
                RouteEntry::new("order", "order", "Order").title("订单管理"),
            ]),
    ]
}
