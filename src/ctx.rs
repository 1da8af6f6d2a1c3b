use super::*;

#[derive(Clone, Deref)]
pub struct Ctx {
    #[deref]
    inner: Rc<CtxInner>,
}

pub struct CtxInner {
    pub geng: Geng,
    pub config: config::Config,
    pub confetti: confetti::Config,
    pub controls: controls::Controls,
}

impl Ctx {
    pub async fn load(geng: &Geng) -> anyhow::Result<Self> {
        let assets = run_dir().join("assets");
        let config: config::Config = file::load_detect(assets.join("config.toml")).await?;
        let confetti = file::load_detect(assets.join("confetti.toml")).await?;
        let controls = file::load_detect(assets.join("controls.toml")).await?;
        log::debug!(
            "loaded config: {} entries max, {} colors",
            config.max_entries,
            config.palette.len(),
        );
        Ok(Self {
            inner: Rc::new(CtxInner {
                geng: geng.clone(),
                config,
                confetti,
                controls,
            }),
        })
    }
}
