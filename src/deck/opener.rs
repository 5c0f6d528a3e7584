//! 打开链接
//!
//! 链接交给系统浏览器，在独立进程中打开，与本程序没有任何回引

use url::Url;

/// 打开链接的外部协作者
pub trait LinkOpener {
    fn open(&self, url: &Url) -> std::io::Result<()>;
}

/// 使用系统默认浏览器打开
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &Url) -> std::io::Result<()> {
        webbrowser::open(url.as_str())
    }
}
