use std::path::Path;

use tempfile::TempDir;

use crate::cli::SourceArgs;
use crate::util::write_text;

pub const PROFILE_CSV: &str = "\
✅企业名称,✅企业类型,✅地区,✅企业简介,✅推荐理由
甲测试有限公司,\"民营企业,大型企业\",总部：南京 分公司：上海市,\"专注新能源,
覆盖全国\",成长快
乙科技股份有限公司,国有企业,总部：苏州市  分公司：大连市,半导体,平台大
甲测试有限公司,外资企业,总部：无锡市,重复行,忽略
丙集团有限公司,民营企业,总部：浐灞
";

pub const IMAGE_CSV: &str = "\
企业名称,图片路径
乙科技股份有限公司,images/yi-1.jpg
乙科技股份有限公司,images/yi-2.jpg
未收录有限公司,images/none.jpg
";

pub const BUSINESS_CSV: &str = "\
企业名称,业务板块/主要业务,关联岗位
乙科技股份有限公司,芯片设计,\"数字前端工程师,验证工程师\"
";

pub fn source_args(dir: &Path) -> SourceArgs {
    SourceArgs {
        data_dir: dir.to_path_buf(),
        profile_csv: "公司介绍.csv".into(),
        image_csv: "企业图片.csv".into(),
        business_csv: "企业业务板块和内推岗位.csv".into(),
    }
}

pub fn sample_data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_text(&dir.path().join("公司介绍.csv"), PROFILE_CSV).expect("write profile csv");
    write_text(&dir.path().join("企业图片.csv"), IMAGE_CSV).expect("write image csv");
    write_text(
        &dir.path().join("企业业务板块和内推岗位.csv"),
        BUSINESS_CSV,
    )
    .expect("write business csv");
    dir
}
