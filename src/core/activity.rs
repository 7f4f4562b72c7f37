// Request Activity Tracker - 全局请求活动跟踪
//
// 维护进程级在途请求计数，供 UI 层订阅以驱动全局加载指示器

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, Weak};

use once_cell::sync::OnceCell;
use serde::Serialize;

/// 全局跟踪器单例
static REQUEST_ACTIVITY: OnceCell<RequestActivityTracker> = OnceCell::new();

type Listener = Arc<dyn Fn() + Send + Sync>;

/// 在途请求快照（不可变值对象）
///
/// 每次变更都会生成新的 Arc 实例，订阅方可用 `Arc::ptr_eq`
/// 做基于引用同一性的变更检测
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnapshot {
    /// 当前在途请求数
    pub active_requests: u64,
}

struct TrackerInner {
    snapshot: Arc<ActivitySnapshot>,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// 在途请求跟踪器
///
/// 计数、监听器集合与当前快照在同一把锁内读改写，
/// 任意线程交错调用时计数保持一致
pub struct RequestActivityTracker {
    inner: Arc<Mutex<TrackerInner>>,
}

impl RequestActivityTracker {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(TrackerInner {
                snapshot: Arc::new(ActivitySnapshot { active_requests: 0 }),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// 获取全局单例实例
    pub fn global() -> &'static Self {
        REQUEST_ACTIVITY.get_or_init(Self::new)
    }

    /// 登记一个请求开始
    pub fn increment(&self) {
        self.mutate(|count| count + 1);
    }

    /// 登记一个请求结束
    ///
    /// 计数下限为 0：begin/end 不配对时在下限处停住，不报错。
    /// 即使被钳制也会生成新快照并通知订阅方
    pub fn decrement(&self) {
        self.mutate(|count| count.saturating_sub(1));
    }

    /// 注册变更监听器
    ///
    /// 每次调用建立一条独立注册（多次注册同一闭包得到多条注册，
    /// 各自的句柄只注销自己这一条）。句柄析构时自动注销；
    /// 句柄只持有对跟踪器的弱引用，跟踪器先于句柄销毁也是安全的
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::new(listener)));
            id
        };
        Subscription {
            tracker: Arc::downgrade(&self.inner),
            id,
            active: true,
        }
    }

    /// 当前快照（引用语义）
    ///
    /// 两次调用之间无变更时返回同一个 Arc
    pub fn snapshot(&self) -> Arc<ActivitySnapshot> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&inner.snapshot)
    }

    fn mutate(&self, update: impl FnOnce(u64) -> u64) {
        // 锁内完成读改写与快照替换，锁外通知
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            let count = update(inner.snapshot.active_requests);
            inner.snapshot = Arc::new(ActivitySnapshot {
                active_requests: count,
            });
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };

        for listener in listeners {
            // 单个监听器 panic 不影响其余监听器，也不向调用方传播
            if catch_unwind(AssertUnwindSafe(|| listener())).is_err() {
                tracing::warn!("活动监听器 panic，已忽略");
            }
        }
    }
}

impl Default for RequestActivityTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// 监听器注册句柄
///
/// 显式调用 `unsubscribe` 或析构时注销对应注册
pub struct Subscription {
    tracker: Weak<Mutex<TrackerInner>>,
    id: u64,
    active: bool,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        // 跟踪器已销毁时无事可做
        if let Some(inner) = self.tracker.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
            let id = self.id;
            inner.listeners.retain(|(lid, _)| *lid != id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

/// 请求活动 RAII 守卫
///
/// 构造时在全局跟踪器登记开始，析构时登记结束，
/// 保证成功与失败路径都会配平计数
pub struct ActivityGuard {
    _private: (),
}

impl ActivityGuard {
    pub fn begin() -> Self {
        RequestActivityTracker::global().increment();
        Self { _private: () }
    }
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        RequestActivityTracker::global().decrement();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn test_increment_decrement_interleaved() {
        let tracker = RequestActivityTracker::new();
        tracker.increment();
        tracker.increment();
        tracker.decrement();
        tracker.increment();
        tracker.decrement();
        // n=3, m=2
        assert_eq!(tracker.snapshot().active_requests, 1);
    }

    #[test]
    fn test_decrement_clamped_at_zero() {
        let tracker = RequestActivityTracker::new();
        tracker.decrement();
        assert_eq!(tracker.snapshot().active_requests, 0);

        tracker.increment();
        tracker.decrement();
        tracker.decrement();
        tracker.decrement();
        assert_eq!(tracker.snapshot().active_requests, 0);
    }

    #[test]
    fn test_snapshot_identity_stable_without_mutation() {
        let tracker = RequestActivityTracker::new();
        tracker.increment();
        let a = tracker.snapshot();
        let b = tracker.snapshot();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_snapshot_identity_fresh_after_mutation() {
        let tracker = RequestActivityTracker::new();
        let before = tracker.snapshot();
        tracker.increment();
        let after = tracker.snapshot();
        assert!(!Arc::ptr_eq(&before, &after));

        // 钳制在 0 的 decrement 同样生成新快照
        tracker.decrement();
        let clamped_before = tracker.snapshot();
        tracker.decrement();
        let clamped_after = tracker.snapshot();
        assert!(!Arc::ptr_eq(&clamped_before, &clamped_after));
        assert_eq!(clamped_after.active_requests, 0);
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let tracker = RequestActivityTracker::new();
        let calls = Arc::new(AtomicU64::new(0));

        let counted = Arc::clone(&calls);
        let sub = tracker.subscribe(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });

        tracker.increment();
        tracker.decrement();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        sub.unsubscribe();
        tracker.increment();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_duplicate_registration_is_independent() {
        let tracker = RequestActivityTracker::new();
        let calls = Arc::new(AtomicU64::new(0));

        let counted = Arc::clone(&calls);
        let listener = move || {
            counted.fetch_add(1, Ordering::SeqCst);
        };
        let first = tracker.subscribe(listener.clone());
        let _second = tracker.subscribe(listener);

        tracker.increment();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // 注销其中一条，另一条仍然存活
        first.unsubscribe();
        tracker.increment();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_panicking_listener_does_not_block_others() {
        let tracker = RequestActivityTracker::new();
        let calls = Arc::new(AtomicU64::new(0));

        let _bad = tracker.subscribe(|| panic!("broken observer"));
        let counted = Arc::clone(&calls);
        let _good = tracker.subscribe(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });

        tracker.increment();
        assert_eq!(tracker.snapshot().active_requests, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let tracker = RequestActivityTracker::new();
        let calls = Arc::new(AtomicU64::new(0));

        {
            let counted = Arc::clone(&calls);
            let _sub = tracker.subscribe(move || {
                counted.fetch_add(1, Ordering::SeqCst);
            });
            tracker.increment();
        }

        tracker.increment();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_outlives_tracker() {
        let tracker = RequestActivityTracker::new();
        let sub = tracker.subscribe(|| {});
        drop(tracker);
        // 跟踪器先销毁，句柄注销安全降级为 no-op
        sub.unsubscribe();

        let tracker = RequestActivityTracker::new();
        let late = tracker.subscribe(|| {});
        drop(tracker);
        drop(late);
    }

    #[test]
    #[serial]
    fn test_activity_guard_balances_global_counter() {
        let tracker = RequestActivityTracker::global();
        let before = tracker.snapshot().active_requests;

        {
            let _a = ActivityGuard::begin();
            let _b = ActivityGuard::begin();
            assert_eq!(tracker.snapshot().active_requests, before + 2);
        }

        assert_eq!(tracker.snapshot().active_requests, before);
    }
}
