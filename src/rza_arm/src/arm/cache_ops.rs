cache_op!(
    /// Data cache clean and invalidate by set/way
    DCCISW, DCCISWAccessor, [p15, c7, 0, c14, 2]
);
cache_op!(
    /// Data cache clean by set/way
    DCCSW, DCCSWAccessor, [p15, c7, 0, c10, 2]
);
cache_op!(
    /// Data cache clean and invalidate by MVA to PoC
    DCCIMVAC, DCCIMVACAccessor, [p15, c7, 0, c14, 1]
);
cache_op!(
    /// Data cache clean by MVA to PoC
    DCCMVAC, DCCMVACAccessor, [p15, c7, 0, c10, 1]
);
cache_op!(
    /// Data cache invalidate by MVA to PoC
    DCIMVAC, DCIMVACAccessor, [p15, c7, 0, c6, 1]
);
