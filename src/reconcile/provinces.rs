const CITY_PROVINCES: &[(&str, &str)] = &[
    ("南京市", "江苏省"),
    ("苏州市", "江苏省"),
    ("无锡市", "江苏省"),
    ("常州市", "江苏省"),
    ("徐州市", "江苏省"),
    ("南通市", "江苏省"),
    ("连云港市", "江苏省"),
    ("淮安市", "江苏省"),
    ("盐城市", "江苏省"),
    ("扬州市", "江苏省"),
    ("镇江市", "江苏省"),
    ("泰州市", "江苏省"),
    ("宿迁市", "江苏省"),
    ("杭州市", "浙江省"),
    ("宁波市", "浙江省"),
    ("温州市", "浙江省"),
    ("嘉兴市", "浙江省"),
    ("湖州市", "浙江省"),
    ("绍兴市", "浙江省"),
    ("金华市", "浙江省"),
    ("衢州市", "浙江省"),
    ("舟山市", "浙江省"),
    ("台州市", "浙江省"),
    ("丽水市", "浙江省"),
    ("广州市", "广东省"),
    ("深圳市", "广东省"),
    ("珠海市", "广东省"),
    ("汕头市", "广东省"),
    ("佛山市", "广东省"),
    ("韶关市", "广东省"),
    ("湛江市", "广东省"),
    ("肇庆市", "广东省"),
    ("江门市", "广东省"),
    ("茂名市", "广东省"),
    ("惠州市", "广东省"),
    ("梅州市", "广东省"),
    ("汕尾市", "广东省"),
    ("河源市", "广东省"),
    ("阳江市", "广东省"),
    ("清远市", "广东省"),
    ("东莞市", "广东省"),
    ("中山市", "广东省"),
    ("潮州市", "广东省"),
    ("揭阳市", "广东省"),
    ("云浮市", "广东省"),
    ("上海市", "上海市"),
    ("北京市", "北京市"),
    ("天津市", "天津市"),
    ("重庆市", "重庆市"),
    ("济南市", "山东省"),
    ("青岛市", "山东省"),
    ("淄博市", "山东省"),
    ("枣庄市", "山东省"),
    ("东营市", "山东省"),
    ("烟台市", "山东省"),
    ("潍坊市", "山东省"),
    ("济宁市", "山东省"),
    ("泰安市", "山东省"),
    ("威海市", "山东省"),
    ("日照市", "山东省"),
    ("临沂市", "山东省"),
    ("德州市", "山东省"),
    ("聊城市", "山东省"),
    ("滨州市", "山东省"),
    ("菏泽市", "山东省"),
    ("成都市", "四川省"),
    ("自贡市", "四川省"),
    ("攀枝花市", "四川省"),
    ("泸州市", "四川省"),
    ("德阳市", "四川省"),
    ("绵阳市", "四川省"),
    ("广元市", "四川省"),
    ("遂宁市", "四川省"),
    ("内江市", "四川省"),
    ("乐山市", "四川省"),
    ("南充市", "四川省"),
    ("眉山市", "四川省"),
    ("宜宾市", "四川省"),
    ("广安市", "四川省"),
    ("达州市", "四川省"),
    ("雅安市", "四川省"),
    ("巴中市", "四川省"),
    ("资阳市", "四川省"),
    ("合肥市", "安徽省"),
    ("芜湖市", "安徽省"),
    ("蚌埠市", "安徽省"),
    ("淮南市", "安徽省"),
    ("马鞍山市", "安徽省"),
    ("淮北市", "安徽省"),
    ("铜陵市", "安徽省"),
    ("安庆市", "安徽省"),
    ("黄山市", "安徽省"),
    ("滁州市", "安徽省"),
    ("阜阳市", "安徽省"),
    ("宿州市", "安徽省"),
    ("六安市", "安徽省"),
    ("亳州市", "安徽省"),
    ("池州市", "安徽省"),
    ("宣城市", "安徽省"),
    ("石家庄市", "河北省"),
    ("唐山市", "河北省"),
    ("秦皇岛市", "河北省"),
    ("邯郸市", "河北省"),
    ("邢台市", "河北省"),
    ("保定市", "河北省"),
    ("张家口市", "河北省"),
    ("承德市", "河北省"),
    ("沧州市", "河北省"),
    ("廊坊市", "河北省"),
    ("衡水市", "河北省"),
    ("武汉市", "湖北省"),
    ("黄石市", "湖北省"),
    ("十堰市", "湖北省"),
    ("宜昌市", "湖北省"),
    ("襄阳市", "湖北省"),
    ("鄂州市", "湖北省"),
    ("荆门市", "湖北省"),
    ("孝感市", "湖北省"),
    ("荆州市", "湖北省"),
    ("黄冈市", "湖北省"),
    ("咸宁市", "湖北省"),
    ("随州市", "湖北省"),
    ("长沙市", "湖南省"),
    ("株洲市", "湖南省"),
    ("湘潭市", "湖南省"),
    ("衡阳市", "湖南省"),
    ("邵阳市", "湖南省"),
    ("岳阳市", "湖南省"),
    ("常德市", "湖南省"),
    ("张家界市", "湖南省"),
    ("益阳市", "湖南省"),
    ("郴州市", "湖南省"),
    ("永州市", "湖南省"),
    ("怀化市", "湖南省"),
    ("娄底市", "湖南省"),
    ("福州市", "福建省"),
    ("厦门市", "福建省"),
    ("莆田市", "福建省"),
    ("三明市", "福建省"),
    ("泉州市", "福建省"),
    ("漳州市", "福建省"),
    ("南平市", "福建省"),
    ("龙岩市", "福建省"),
    ("宁德市", "福建省"),
    ("郑州市", "河南省"),
    ("开封市", "河南省"),
    ("洛阳市", "河南省"),
    ("平顶山市", "河南省"),
    ("安阳市", "河南省"),
    ("鹤壁市", "河南省"),
    ("新乡市", "河南省"),
    ("焦作市", "河南省"),
    ("濮阳市", "河南省"),
    ("许昌市", "河南省"),
    ("漯河市", "河南省"),
    ("三门峡市", "河南省"),
    ("南阳市", "河南省"),
    ("商丘市", "河南省"),
    ("信阳市", "河南省"),
    ("周口市", "河南省"),
    ("驻马店市", "河南省"),
    ("西安市", "陕西省"),
    ("铜川市", "陕西省"),
    ("宝鸡市", "陕西省"),
    ("咸阳市", "陕西省"),
    ("渭南市", "陕西省"),
    ("延安市", "陕西省"),
    ("汉中市", "陕西省"),
    ("榆林市", "陕西省"),
    ("安康市", "陕西省"),
    ("商洛市", "陕西省"),
    ("沈阳市", "辽宁省"),
    ("大连市", "辽宁省"),
    ("鞍山市", "辽宁省"),
    ("抚顺市", "辽宁省"),
    ("本溪市", "辽宁省"),
    ("丹东市", "辽宁省"),
    ("锦州市", "辽宁省"),
    ("营口市", "辽宁省"),
    ("阜新市", "辽宁省"),
    ("辽阳市", "辽宁省"),
    ("盘锦市", "辽宁省"),
    ("铁岭市", "辽宁省"),
    ("朝阳市", "辽宁省"),
    ("葫芦岛市", "辽宁省"),
];

pub fn province_for(city: &str) -> Option<&'static str> {
    CITY_PROVINCES
        .iter()
        .find(|(candidate, _)| *candidate == city)
        .map(|(_, province)| *province)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_prefecture_and_municipality_cities() {
        assert_eq!(province_for("苏州市"), Some("江苏省"));
        assert_eq!(province_for("上海市"), Some("上海市"));
        assert_eq!(province_for("浐灞市"), None);
        assert_eq!(province_for(""), None);
    }
}
